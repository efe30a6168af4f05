use uuid::Uuid;

use crate::modules::tag::application::ports::incoming::use_cases::SyncTagsUseCase;
use crate::shared::outcome::Outcome;

pub mod create_project_service;
pub mod delete_project_service;
pub mod get_projects_service;
pub mod get_related_projects_service;
pub mod image_sync;
pub mod optimise_images_service;
pub mod project_images_service;
pub mod project_repositories_service;
pub mod repo_sync;
pub mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_projects_service::{GetProjectsService, GetSingleProjectService};
pub use get_related_projects_service::GetRelatedProjectsService;
pub use image_sync::ImageSync;
pub use optimise_images_service::OptimiseImagesService;
pub use project_images_service::{GetProjectImagesService, SyncProjectImagesService};
pub use project_repositories_service::{
    GetProjectRepositoriesService, SyncProjectRepositoriesService,
};
pub use update_project_service::UpdateProjectService;

/// Finds or creates tags by name and returns their distinct ids in input order.
pub(crate) async fn resolve_tag_ids(
    tags: &(dyn SyncTagsUseCase + Send + Sync),
    names: Vec<String>,
) -> Outcome<Vec<Uuid>> {
    let mut ids: Vec<Uuid> = Vec::new();
    for tag in tags.execute(names).await? {
        if !ids.contains(&tag.id) {
            ids.push(tag.id);
        }
    }
    Ok(ids)
}
