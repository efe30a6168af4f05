use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::{
    ProjectImage, ProjectRepo, ProjectView,
};
use crate::shared::outcome::Failure;

pub const PROJECT_NOT_FOUND: &str = "Project not found.";
pub const IMAGE_NOT_FOUND: &str = "Image not found.";
pub const REPOSITORY_NOT_FOUND: &str = "Repository not found.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring of title or short description.
    pub search: Option<String>,
}

/// Another project sharing at least one tag with the subject project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOverlap {
    pub project_id: Uuid,
    pub shared: usize,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<ProjectQueryError> for Failure {
    fn from(err: ProjectQueryError) -> Self {
        match err {
            ProjectQueryError::NotFound => Failure::not_found(PROJECT_NOT_FOUND),
            ProjectQueryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Year descending. Relations loaded.
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<ProjectView>, ProjectQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectQueryError>;

    async fn exists(&self, id: Uuid) -> Result<bool, ProjectQueryError>;

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError>;

    /// Other projects sharing tags with `project_id`, in store order.
    async fn tag_overlaps(&self, project_id: Uuid) -> Result<Vec<TagOverlap>, ProjectQueryError>;

    /// Category, then order, then id.
    async fn images(&self, project_id: Uuid) -> Result<Vec<ProjectImage>, ProjectQueryError>;

    async fn repositories(&self, project_id: Uuid) -> Result<Vec<ProjectRepo>, ProjectQueryError>;

    async fn unoptimised_images(&self) -> Result<Vec<ProjectImage>, ProjectQueryError>;
}
