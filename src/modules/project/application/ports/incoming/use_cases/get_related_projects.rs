use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::shared::outcome::Outcome;

pub const RELATED_LIMIT: usize = 3;

#[async_trait]
pub trait GetRelatedProjectsUseCase: Send + Sync {
    /// Up to [`RELATED_LIMIT`] other projects, most shared tags first. An id
    /// with no tags (or no project) yields an empty list.
    async fn execute(&self, id: Uuid) -> Outcome<Vec<ProjectView>>;
}
