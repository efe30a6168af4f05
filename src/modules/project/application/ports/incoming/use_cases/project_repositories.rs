use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{ProjectRepo, RepoTarget};
use crate::shared::outcome::Outcome;

#[async_trait]
pub trait GetProjectRepositoriesUseCase: Send + Sync {
    async fn list(&self, project_id: Uuid) -> Outcome<Vec<ProjectRepo>>;

    async fn get(&self, project_id: Uuid, repo_id: Uuid) -> Outcome<ProjectRepo>;
}

#[async_trait]
pub trait SyncProjectRepositoriesUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: Uuid,
        targets: Vec<RepoTarget>,
    ) -> Outcome<Vec<ProjectRepo>>;
}
