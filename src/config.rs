// src/config.rs

use std::env;
use std::path::PathBuf;

use crate::modules::media::adapter::outgoing::tinify_optimiser::DEFAULT_TINIFY_URL;
use crate::shared::text_match::TextMatcherKind;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Where aggregates are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres { database_url: String },
    /// Process-local store. Search semantics follow `matcher`.
    Memory { matcher: TextMatcherKind },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TinifyConfig {
    pub api_key: String,
    pub api_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage: StorageBackend,
    pub upload_dir: PathBuf,
    /// `None` disables image optimisation.
    pub tinify: Option<TinifyConfig>,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rust_env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{rust_env}")).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match var("PORT") {
            None => 8080,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
        };

        let backend = var("STORAGE_BACKEND").unwrap_or_else(|| "postgres".to_string());
        let storage = match backend.trim().to_lowercase().as_str() {
            "postgres" => StorageBackend::Postgres {
                database_url: var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            "memory" => StorageBackend::Memory {
                matcher: match var("SEARCH_MATCHER") {
                    None => TextMatcherKind::default(),
                    Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                        name: "SEARCH_MATCHER",
                        value: raw,
                    })?,
                },
            },
            _ => {
                return Err(ConfigError::Invalid {
                    name: "STORAGE_BACKEND",
                    value: backend,
                })
            }
        };

        let upload_dir = PathBuf::from(var("UPLOAD_DIR").unwrap_or_else(|| "uploads".to_string()));

        let tinify = var("TINIFY_API_KEY").map(|api_key| TinifyConfig {
            api_key,
            api_url: var("TINIFY_API_URL").unwrap_or_else(|| DEFAULT_TINIFY_URL.to_string()),
        });

        Ok(Self {
            host,
            port,
            storage,
            upload_dir,
            tinify,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn load(vars: HashMap<&str, &str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()))
    }

    #[test]
    fn memory_backend_needs_no_database() {
        let config = load(hashmap! {
            "STORAGE_BACKEND" => "memory",
            "SEARCH_MATCHER" => "pattern",
            "PORT" => "9000",
        })
        .unwrap();

        assert_eq!(
            config.storage,
            StorageBackend::Memory {
                matcher: TextMatcherKind::Pattern
            }
        );
        assert_eq!(config.server_url(), "127.0.0.1:9000");
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.tinify, None);
    }

    #[test]
    fn postgres_backend_requires_database_url() {
        let err = load(hashmap! { "STORAGE_BACKEND" => "postgres" }).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let config = load(hashmap! { "DATABASE_URL" => "postgres://localhost/showcase" }).unwrap();
        assert!(matches!(config.storage, StorageBackend::Postgres { .. }));
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = load(hashmap! { "STORAGE_BACKEND" => "memory", "PORT" => "http" }).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));

        let err = load(hashmap! { "STORAGE_BACKEND" => "sqlite" }).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                name: "STORAGE_BACKEND",
                ..
            }
        ));
    }

    #[test]
    fn tinify_key_enables_optimiser_with_default_url() {
        let config = load(hashmap! {
            "STORAGE_BACKEND" => "memory",
            "TINIFY_API_KEY" => "secret",
        })
        .unwrap();

        let tinify = config.tinify.unwrap();
        assert_eq!(tinify.api_key, "secret");
        assert_eq!(tinify.api_url, DEFAULT_TINIFY_URL);
    }
}
