use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectCommand, ProjectView};
use crate::shared::outcome::Outcome;

/// Replaces scalars and re-syncs tags, images and repositories. An empty
/// list clears the relation.
#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, command: ProjectCommand) -> Outcome<ProjectView>;
}
