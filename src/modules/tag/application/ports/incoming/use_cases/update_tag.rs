use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::{Tag, TagDraft};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait UpdateTagUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, draft: TagDraft) -> Outcome<Tag>;
}
