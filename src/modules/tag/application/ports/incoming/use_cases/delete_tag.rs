use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait DeleteTagUseCase: Send + Sync {
    /// Returns the tag as it was before removal.
    async fn execute(&self, id: Uuid) -> Outcome<Tag>;
}
