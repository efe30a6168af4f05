use async_trait::async_trait;

use crate::modules::tag::application::domain::entities::{Tag, TagDraft};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait CreateTagUseCase: Send + Sync {
    async fn execute(&self, draft: TagDraft) -> Outcome<Tag>;
}
