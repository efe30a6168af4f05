use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::image_sync::ImageSync;
use super::repo_sync::prepare_repositories;
use super::resolve_tag_ids;
use crate::modules::project::application::domain::entities::{ProjectCommand, ProjectView};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectUseCase;
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

pub struct UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    tags: Arc<dyn SyncTagsUseCase + Send + Sync>,
    images: ImageSync,
}

impl<Q, R> UpdateProjectService<Q, R>
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
impl<Q, R> UpdateProjectUseCase for UpdateProjectService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(&self, id: Uuid, command: ProjectCommand) -> Outcome<ProjectView> {
        let current = self.query.get_by_id(id).await?;
        let details = command.details.validate()?;

        if self.query.title_exists(&details.title, Some(id)).await? {
            return Err(ProjectRepositoryError::TitleAlreadyExists.into());
        }

        let repositories = prepare_repositories(id, current.repositories, command.repositories)?;
        let tag_ids = resolve_tag_ids(self.tags.as_ref(), command.tags).await?;

        let slug = slug_for(&details.title);
        let project = details.into_project(id, slug);

        let prepared = self.images.prepare(id, current.images, command.images).await?;

        let changes = ProjectChangeset {
            project,
            tag_ids,
            images: prepared.changes,
            repositories,
        };

        if let Err(e) = self.repository.update_project(changes).await {
            self.images.rollback(prepared.files).await;
            return Err(e.into());
        }
        self.images.commit(prepared.files).await;

        info!(project_id = %id, "Project updated");

        Ok(self.query.get_by_id(id).await?)
    }
}
