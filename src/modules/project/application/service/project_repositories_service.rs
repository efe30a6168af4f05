use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::repo_sync::prepare_repositories;
use crate::modules::project::application::domain::entities::{ProjectRepo, RepoTarget};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectRepositoriesUseCase, SyncProjectRepositoriesUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, REPOSITORY_NOT_FOUND,
};
use crate::shared::outcome::{Failure, Outcome};

pub struct GetProjectRepositoriesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectRepositoriesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectRepositoriesUseCase for GetProjectRepositoriesService<Q>
where
    Q: ProjectQuery,
{
    async fn list(&self, project_id: Uuid) -> Outcome<Vec<ProjectRepo>> {
        if !self.query.exists(project_id).await? {
            return Err(ProjectQueryError::NotFound.into());
        }
        Ok(self.query.repositories(project_id).await?)
    }

    async fn get(&self, project_id: Uuid, repo_id: Uuid) -> Outcome<ProjectRepo> {
        self.list(project_id)
            .await?
            .into_iter()
            .find(|r| r.id == repo_id)
            .ok_or_else(|| Failure::not_found(REPOSITORY_NOT_FOUND))
    }
}

pub struct SyncProjectRepositoriesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SyncProjectRepositoriesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> SyncProjectRepositoriesUseCase for SyncProjectRepositoriesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(
        &self,
        project_id: Uuid,
        targets: Vec<RepoTarget>,
    ) -> Outcome<Vec<ProjectRepo>> {
        if !self.query.exists(project_id).await? {
            return Err(ProjectQueryError::NotFound.into());
        }

        let current = self.query.repositories(project_id).await?;
        let changes = prepare_repositories(project_id, current, targets)?;

        if !changes.is_empty() {
            self.repository
                .apply_repository_changes(project_id, changes)
                .await?;
            info!(%project_id, "Project repositories synced");
        }

        Ok(self.query.repositories(project_id).await?)
    }
}
