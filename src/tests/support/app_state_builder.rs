use std::sync::Arc;

use actix_web::web;

use crate::infrastructure::memory_store::MemoryStore;
use crate::modules::media::application::ports::outgoing::ImageOptimiser;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase,
};
use crate::modules::tag::application::ports::incoming::use_cases::GetTagsUseCase;
use crate::tests::support::media_doubles::{FixedOptimiser, InMemoryFileStorage};
use crate::{build_state, AppState, Stores};

/// Real services over the in-memory store and file doubles. Individual use
/// cases can be swapped for stubs.
pub struct TestAppStateBuilder {
    store: MemoryStore,
    files: InMemoryFileStorage,
    optimiser: Arc<dyn ImageOptimiser>,
    create_project: Option<Arc<dyn CreateProjectUseCase + Send + Sync>>,
    get_projects: Option<Arc<dyn GetProjectsUseCase + Send + Sync>>,
    get_tags: Option<Arc<dyn GetTagsUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            store: MemoryStore::default(),
            files: InMemoryFileStorage::default(),
            optimiser: Arc::new(FixedOptimiser::failing()),
            create_project: None,
            get_projects: None,
            get_tags: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_store(mut self, store: MemoryStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_files(mut self, files: InMemoryFileStorage) -> Self {
        self.files = files;
        self
    }

    pub fn with_optimiser(mut self, optimiser: impl ImageOptimiser + 'static) -> Self {
        self.optimiser = Arc::new(optimiser);
        self
    }

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.create_project = Some(Arc::new(uc));
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.get_projects = Some(Arc::new(uc));
        self
    }

    pub fn with_get_tags(mut self, uc: impl GetTagsUseCase + Send + Sync + 'static) -> Self {
        self.get_tags = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let mut state = build_state(
            Stores::memory(self.store),
            Arc::new(self.files),
            self.optimiser,
        );

        if let Some(uc) = self.create_project {
            state.project.create = uc;
        }
        if let Some(uc) = self.get_projects {
            state.project.get_list = uc;
        }
        if let Some(uc) = self.get_tags {
            state.tag.get_list = uc;
        }

        web::Data::new(state)
    }
}
