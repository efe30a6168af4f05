use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetCompaniesUseCase: Send + Sync {
    async fn execute(&self, search: Option<String>) -> Outcome<Vec<Company>>;
}

#[async_trait]
pub trait GetCompanyUseCase: Send + Sync {
    async fn by_id(&self, id: Uuid) -> Outcome<Company>;

    async fn by_slug(&self, slug: &str) -> Outcome<Company>;
}
