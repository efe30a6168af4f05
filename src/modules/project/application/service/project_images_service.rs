use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::image_sync::ImageSync;
use crate::modules::project::application::domain::entities::{ImageTarget, ProjectImage};
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectImagesUseCase, SyncProjectImagesUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectRepository, IMAGE_NOT_FOUND,
};
use crate::shared::outcome::{Failure, Outcome};

pub struct GetProjectImagesService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectImagesService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectImagesUseCase for GetProjectImagesService<Q>
where
    Q: ProjectQuery,
{
    async fn list(&self, project_id: Uuid) -> Outcome<Vec<ProjectImage>> {
        if !self.query.exists(project_id).await? {
            return Err(ProjectQueryError::NotFound.into());
        }
        Ok(self.query.images(project_id).await?)
    }

    async fn get(&self, project_id: Uuid, image_id: Uuid) -> Outcome<ProjectImage> {
        self.list(project_id)
            .await?
            .into_iter()
            .find(|i| i.id == image_id)
            .ok_or_else(|| Failure::not_found(IMAGE_NOT_FOUND))
    }
}

/// Image collection sync outside of a full project update.
pub struct SyncProjectImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    query: Q,
    repository: R,
    images: ImageSync,
}

impl<Q, R> SyncProjectImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    pub fn new(query: Q, repository: R, images: ImageSync) -> Self {
        Self {
            query,
            repository,
            images,
        }
    }
}

#[async_trait]
impl<Q, R> SyncProjectImagesUseCase for SyncProjectImagesService<Q, R>
where
    Q: ProjectQuery,
    R: ProjectRepository,
{
    async fn execute(
        &self,
        project_id: Uuid,
        targets: Vec<ImageTarget>,
    ) -> Outcome<Vec<ProjectImage>> {
        if !self.query.exists(project_id).await? {
            return Err(ProjectQueryError::NotFound.into());
        }

        let current = self.query.images(project_id).await?;
        let prepared = self.images.prepare(project_id, current, targets).await?;

        if !prepared.changes.is_empty() {
            let created = prepared.changes.create.len();
            let deleted = prepared.changes.delete_ids.len();

            if let Err(e) = self
                .repository
                .apply_image_changes(project_id, prepared.changes)
                .await
            {
                self.images.rollback(prepared.files).await;
                return Err(e.into());
            }
            info!(%project_id, created, deleted, "Project images synced");
        }
        self.images.commit(prepared.files).await;

        Ok(self.query.images(project_id).await?)
    }
}
