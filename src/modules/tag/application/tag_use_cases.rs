use std::sync::Arc;

use crate::modules::tag::application::ports::incoming::use_cases::{
    CreateTagUseCase, DeleteTagUseCase, GetTagUseCase, GetTagsUseCase, SyncTagsUseCase,
    UpdateTagUseCase,
};
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagRepository};
use crate::modules::tag::application::services::{
    CreateTagService, DeleteTagService, GetTagService, GetTagsService, SyncTagsService,
    UpdateTagService,
};

#[derive(Clone)]
pub struct TagUseCases {
    pub create: Arc<dyn CreateTagUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTagUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTagUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTagsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetTagUseCase + Send + Sync>,
    pub sync: Arc<dyn SyncTagsUseCase + Send + Sync>,
}

impl TagUseCases {
    pub fn build<Q, R>(query: Q, repository: R) -> Self
    where
        Q: TagQuery + Clone + 'static,
        R: TagRepository + Clone + 'static,
    {
        Self {
            create: Arc::new(CreateTagService::new(query.clone(), repository.clone())),
            update: Arc::new(UpdateTagService::new(query.clone(), repository.clone())),
            delete: Arc::new(DeleteTagService::new(query.clone(), repository.clone())),
            get_list: Arc::new(GetTagsService::new(query.clone())),
            get_single: Arc::new(GetTagService::new(query.clone())),
            sync: Arc::new(SyncTagsService::new(query, repository)),
        }
    }
}
