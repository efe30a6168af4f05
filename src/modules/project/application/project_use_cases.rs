use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectImagesUseCase,
    GetProjectRepositoriesUseCase, GetProjectsUseCase, GetRelatedProjectsUseCase,
    GetSingleProjectUseCase, OptimiseImagesUseCase, SyncProjectImagesUseCase,
    SyncProjectRepositoriesUseCase, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectQuery, ProjectRepository};
use crate::modules::project::application::service::{
    CreateProjectService, DeleteProjectService, GetProjectImagesService,
    GetProjectRepositoriesService, GetProjectsService, GetRelatedProjectsService,
    GetSingleProjectService, ImageSync, OptimiseImagesService, SyncProjectImagesService,
    SyncProjectRepositoriesService, UpdateProjectService,
};
use crate::modules::tag::application::ports::incoming::use_cases::SyncTagsUseCase;

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_related: Arc<dyn GetRelatedProjectsUseCase + Send + Sync>,
    pub get_images: Arc<dyn GetProjectImagesUseCase + Send + Sync>,
    pub sync_images: Arc<dyn SyncProjectImagesUseCase + Send + Sync>,
    pub optimise_images: Arc<dyn OptimiseImagesUseCase + Send + Sync>,
    pub get_repositories: Arc<dyn GetProjectRepositoriesUseCase + Send + Sync>,
    pub sync_repositories: Arc<dyn SyncProjectRepositoriesUseCase + Send + Sync>,
}

impl ProjectUseCases {
    pub fn build<Q, R>(
        query: Q,
        repository: R,
        tags: Arc<dyn SyncTagsUseCase + Send + Sync>,
        images: ImageSync,
    ) -> Self
    where
        Q: ProjectQuery + Clone + 'static,
        R: ProjectRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateProjectService::new(
                query.clone(),
                repository.clone(),
                Arc::clone(&tags),
                images.clone(),
            )),
            update: Arc::new(UpdateProjectService::new(
                query.clone(),
                repository.clone(),
                tags,
                images.clone(),
            )),
            delete: Arc::new(DeleteProjectService::new(
                query.clone(),
                repository.clone(),
                images.clone(),
            )),
            get_list: Arc::new(GetProjectsService::new(query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(query.clone())),
            get_related: Arc::new(GetRelatedProjectsService::new(query.clone())),
            get_images: Arc::new(GetProjectImagesService::new(query.clone())),
            sync_images: Arc::new(SyncProjectImagesService::new(
                query.clone(),
                repository.clone(),
                images.clone(),
            )),
            optimise_images: Arc::new(OptimiseImagesService::new(
                query.clone(),
                repository.clone(),
                images,
            )),
            get_repositories: Arc::new(GetProjectRepositoriesService::new(query.clone())),
            sync_repositories: Arc::new(SyncProjectRepositoriesService::new(query, repository)),
        }
    }
}
