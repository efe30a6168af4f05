use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetTagsUseCase: Send + Sync {
    async fn execute(&self, search: Option<String>) -> Outcome<Vec<Tag>>;
}

#[async_trait]
pub trait GetTagUseCase: Send + Sync {
    async fn by_id(&self, id: Uuid) -> Outcome<Tag>;

    async fn by_slug(&self, slug: &str) -> Outcome<Tag>;
}
