use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::image_sync::ImageSync;
use super::repo_sync::prepare_repositories;
use super::resolve_tag_ids;
use crate::modules::project::application::domain::entities::{ProjectCommand, ProjectView};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectUseCase;
use crate::modules::project::application::ports::outgoing::{
    ProjectChangeset, ProjectQuery, ProjectRepository, ProjectRepositoryError,
};
use crate::modules::tag::application::ports::incoming::use_cases::SyncTagsUseCase;
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    tags: Arc<dyn SyncTagsUseCase + Send + Sync>,
    images: ImageSync,
}

impl<Q, R> CreateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        tags: Arc<dyn SyncTagsUseCase + Send + Sync>,
        images: ImageSync,
    ) -> Self {
        Self {
            query,
            repository,
            tags,
            images,
        }
    }
}

#[async_trait]
impl<Q, R> CreateProjectUseCase for CreateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(&self, command: ProjectCommand) -> Outcome<ProjectView> {
        let details = command.details.validate()?;

        if self.query.title_exists(&details.title, None).await? {
            return Err(ProjectRepositoryError::TitleAlreadyExists.into());
        }

        let id = Uuid::now_v7();
        let repositories = prepare_repositories(id, Vec::new(), command.repositories)?;

        // Tags are committed by the sync itself, ahead of the aggregate write.
        let tag_ids = resolve_tag_ids(self.tags.as_ref(), command.tags).await?;

        let slug = slug_for(&details.title);
        let project = details.into_project(id, slug);

        let prepared = self.images.prepare(id, Vec::new(), command.images).await?;

        let changes = ProjectChangeset {
            project,
            tag_ids,
            images: prepared.changes,
            repositories,
        };

        if let Err(e) = self.repository.insert_project(changes).await {
            self.images.rollback(prepared.files).await;
            return Err(e.into());
        }
        self.images.commit(prepared.files).await;

        info!(project_id = %id, "Project created");

        Ok(self.query.get_by_id(id).await?)
    }
}
