use async_trait::async_trait;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::outgoing::ProjectFilter;
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self, filter: ProjectFilter) -> Outcome<Vec<ProjectView>>;
}
