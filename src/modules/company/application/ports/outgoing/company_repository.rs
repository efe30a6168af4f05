use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::outgoing::company_query::COMPANY_NOT_FOUND;
use crate::shared::outcome::Failure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompanyRepositoryError {
    #[error("Company not found")]
    NotFound,

    #[error("Company name already exists")]
    NameAlreadyExists,

    #[error("Company slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<CompanyRepositoryError> for Failure {
    fn from(err: CompanyRepositoryError) -> Self {
        match err {
            CompanyRepositoryError::NotFound => Failure::not_found(COMPANY_NOT_FOUND),
            CompanyRepositoryError::NameAlreadyExists => {
                Failure::conflict("A company with the same name already exists.")
            }
            CompanyRepositoryError::SlugAlreadyExists => {
                Failure::conflict("A company with the same slug already exists.")
            }
            CompanyRepositoryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create_company(&self, company: Company) -> Result<Company, CompanyRepositoryError>;

    /// Overwrites every column except `id`.
    async fn update_company(&self, company: Company) -> Result<Company, CompanyRepositoryError>;

    /// Clears `company_id` on referencing projects, then removes the row.
    async fn delete_company(&self, id: Uuid) -> Result<(), CompanyRepositoryError>;

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), CompanyRepositoryError>;
}
