mod create_project;
mod delete_project;
mod dto;
mod get_projects;
mod get_related_projects;
mod get_single_project;
mod project_images;
mod project_repositories;
mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_projects::get_projects_handler;
pub use get_related_projects::get_related_projects_handler;
pub use get_single_project::{get_project_by_id_handler, get_project_by_slug_handler};
pub use project_images::{
    get_project_image_handler, get_project_images_handler, optimise_images_handler,
    sync_project_images_handler,
};
pub use project_repositories::{
    get_project_repositories_handler, get_project_repository_handler,
    sync_project_repositories_handler,
};
pub use update_project::update_project_handler;
