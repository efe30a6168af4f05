use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::{Company, CompanyDraft};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait UpdateCompanyUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: CompanyDraft) -> Outcome<Company>;
}
