use async_trait::async_trait;

use crate::modules::company::application::domain::entities::{Company, CompanyDraft};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait CreateCompanyUseCase: Send + Sync {
    async fn execute(&self, draft: CompanyDraft) -> Outcome<Company>;
}
