pub mod project_images;
pub mod project_repos;
pub mod project_tags;
pub mod projects;
