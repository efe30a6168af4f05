pub mod project_query;
pub mod project_repository;

pub use project_query::{
    ProjectFilter, ProjectQuery, ProjectQueryError, TagOverlap, IMAGE_NOT_FOUND,
    PROJECT_NOT_FOUND, REPOSITORY_NOT_FOUND,
};
pub use project_repository::{
    ProjectChangeset, ProjectRepository, ProjectRepositoryError, PROJECT_TITLE_TAKEN,
};
