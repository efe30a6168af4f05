use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::shared::outcome::Failure;

pub const COMPANY_NOT_FOUND: &str = "Company not found.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompanyQueryError {
    #[error("Company not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<CompanyQueryError> for Failure {
    fn from(err: CompanyQueryError) -> Self {
        match err {
            CompanyQueryError::NotFound => Failure::not_found(COMPANY_NOT_FOUND),
            CompanyQueryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait CompanyQuery: Send + Sync {
    /// Ordered by name. `search` is a case-insensitive substring of the name.
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, CompanyQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Company, CompanyQueryError>;

    async fn name_exists(&self, name: &str, exclude: Option<Uuid>)
        -> Result<bool, CompanyQueryError>;
}
