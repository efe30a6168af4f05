use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{Project, ProjectImage, ProjectRepo};
use crate::modules::project::application::domain::relation_sync::RelationChanges;
use crate::modules::project::application::ports::outgoing::project_query::PROJECT_NOT_FOUND;
use crate::shared::outcome::Failure;

pub const PROJECT_TITLE_TAKEN: &str = "A project with the same title already exists.";

/// Everything one aggregate write touches. Applied in a single transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectChangeset {
    pub project: Project,
    /// Replaces the project's tag links. Distinct ids.
    pub tag_ids: Vec<Uuid>,
    pub images: RelationChanges<ProjectImage>,
    pub repositories: RelationChanges<ProjectRepo>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Project title already exists")]
    TitleAlreadyExists,

    #[error("Project slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ProjectRepositoryError> for Failure {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound => Failure::not_found(PROJECT_NOT_FOUND),
            ProjectRepositoryError::TitleAlreadyExists => Failure::conflict(PROJECT_TITLE_TAKEN),
            ProjectRepositoryError::SlugAlreadyExists => {
                Failure::conflict("A project with the same slug already exists.")
            }
            ProjectRepositoryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError>;

    async fn update_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError>;

    /// Cascades to images, repositories and tag links.
    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;

    async fn apply_image_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectImage>,
    ) -> Result<(), ProjectRepositoryError>;

    async fn apply_repository_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectRepo>,
    ) -> Result<(), ProjectRepositoryError>;

    async fn mark_image_optimised(
        &self,
        image_id: Uuid,
        stored_name: &str,
    ) -> Result<(), ProjectRepositoryError>;

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), ProjectRepositoryError>;
}
