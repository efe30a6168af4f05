mod create_project;
mod delete_project;
mod get_projects;
mod get_related_projects;
mod get_single_project;
mod project_images;
mod project_repositories;
mod update_project;

pub use create_project::CreateProjectUseCase;
pub use delete_project::DeleteProjectUseCase;
pub use get_projects::GetProjectsUseCase;
pub use get_related_projects::{GetRelatedProjectsUseCase, RELATED_LIMIT};
pub use get_single_project::GetSingleProjectUseCase;
pub use project_images::{
    GetProjectImagesUseCase, OptimiseImagesUseCase, SyncProjectImagesUseCase,
};
pub use project_repositories::{GetProjectRepositoriesUseCase, SyncProjectRepositoriesUseCase};
pub use update_project::UpdateProjectUseCase;
