pub mod tag_query;
pub mod tag_repository;

pub use tag_query::{TagQuery, TagQueryError, TAG_NOT_FOUND};
pub use tag_repository::{TagRepository, TagRepositoryError};
