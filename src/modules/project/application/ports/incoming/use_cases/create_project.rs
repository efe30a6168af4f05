use async_trait::async_trait;

use crate::modules::project::application::domain::entities::{ProjectCommand, ProjectView};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, command: ProjectCommand) -> Outcome<ProjectView>;
}
