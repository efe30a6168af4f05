use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::tag_query::TAG_NOT_FOUND;
use crate::shared::outcome::Failure;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Tag not found")]
    NotFound,

    #[error("Tag title already exists")]
    TitleAlreadyExists,

    #[error("Tag slug already exists")]
    SlugAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TagRepositoryError> for Failure {
    fn from(err: TagRepositoryError) -> Self {
        match err {
            TagRepositoryError::NotFound => Failure::not_found(TAG_NOT_FOUND),
            TagRepositoryError::TitleAlreadyExists => {
                Failure::conflict("A tag with the same title already exists.")
            }
            TagRepositoryError::SlugAlreadyExists => {
                Failure::conflict("A tag with the same slug already exists.")
            }
            TagRepositoryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError>;

    /// Overwrites every column except `id`.
    async fn update_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError>;

    /// Removes the tag and its project links. Projects are untouched.
    async fn delete_tag(&self, id: Uuid) -> Result<(), TagRepositoryError>;

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), TagRepositoryError>;
}
