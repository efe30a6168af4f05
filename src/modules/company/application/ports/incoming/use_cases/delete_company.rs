use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait DeleteCompanyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Outcome<Company>;
}
