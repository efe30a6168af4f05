use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::LOCATION;
use tracing::debug;

use crate::modules::media::application::ports::outgoing::{ImageOptimiser, OptimiserError};

pub const DEFAULT_TINIFY_URL: &str = "https://api.tinify.com";

/// Tinify "shrink" API: upload the image, then download the compressed
/// output from the `Location` it answers with.
#[derive(Clone)]
pub struct TinifyOptimiser {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl TinifyOptimiser {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    async fn rejected(response: reqwest::Response) -> OptimiserError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        OptimiserError::Rejected { status, body }
    }
}

#[async_trait]
impl ImageOptimiser for TinifyOptimiser {
    async fn optimise(&self, bytes: &[u8]) -> Result<Vec<u8>, OptimiserError> {
        let response = self
            .client
            .post(format!("{}/shrink", self.base_url))
            .basic_auth("api", Some(&self.api_key))
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| OptimiserError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::rejected(response).await);
        }

        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| OptimiserError::Request("missing Location header".to_string()))?;

        let output = self
            .client
            .get(&location)
            .basic_auth("api", Some(&self.api_key))
            .send()
            .await
            .map_err(|e| OptimiserError::Request(e.to_string()))?;

        if !output.status().is_success() {
            return Err(Self::rejected(output).await);
        }

        let optimised = output
            .bytes()
            .await
            .map_err(|e| OptimiserError::Request(e.to_string()))?;

        debug!(
            before = bytes.len(),
            after = optimised.len(),
            "Image optimised"
        );

        Ok(optimised.to_vec())
    }
}

/// Used when no API key is configured. Every image is stored as uploaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledOptimiser;

#[async_trait]
impl ImageOptimiser for DisabledOptimiser {
    async fn optimise(&self, _bytes: &[u8]) -> Result<Vec<u8>, OptimiserError> {
        Err(OptimiserError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_optimiser_always_declines() {
        let result = DisabledOptimiser.optimise(b"img").await;
        assert_eq!(result, Err(OptimiserError::Disabled));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_request_error() {
        let optimiser = TinifyOptimiser::new("http://127.0.0.1:9/", "key");
        assert_eq!(optimiser.base_url, "http://127.0.0.1:9");

        let result = optimiser.optimise(b"img").await;
        assert!(matches!(result, Err(OptimiserError::Request(_))));
    }
}
