use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::outcome::Failure;

pub const TAG_NOT_FOUND: &str = "Tag not found.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TagQueryError {
    #[error("Tag not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<TagQueryError> for Failure {
    fn from(err: TagQueryError) -> Self {
        match err {
            TagQueryError::NotFound => Failure::not_found(TAG_NOT_FOUND),
            TagQueryError::DatabaseError(msg) => Failure::internal(msg),
        }
    }
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    /// Ordered by title. `search` is a case-insensitive substring of the title.
    async fn list(&self, search: Option<String>) -> Result<Vec<Tag>, TagQueryError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, TagQueryError>;

    async fn get_by_slug(&self, slug: &str) -> Result<Tag, TagQueryError>;

    /// Case-insensitive exact match on title.
    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagQueryError>;

    async fn title_exists(&self, title: &str, exclude: Option<Uuid>)
        -> Result<bool, TagQueryError>;
}
