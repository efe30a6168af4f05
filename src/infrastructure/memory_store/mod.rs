// src/infrastructure/memory_store/mod.rs
//
// Process-local implementation of every persistence port, used for local
// runs without Postgres and as the backing store of service tests. Vectors
// keep insertion order, which stands in for store order.

mod company_store;
mod project_store;
mod tag_store;

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;
use crate::modules::project::application::domain::entities::{Project, ProjectImage, ProjectRepo};
use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::text_match::{TextMatcher, TextMatcherKind};

#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub tags: Vec<Tag>,
    pub companies: Vec<Company>,
    pub projects: Vec<Project>,
    pub images: Vec<ProjectImage>,
    pub repos: Vec<ProjectRepo>,
    /// `(project_id, tag_id)`, unique.
    pub project_tags: Vec<(Uuid, Uuid)>,
}

#[derive(Clone)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
    matcher: Arc<dyn TextMatcher>,
}

impl MemoryStore {
    pub fn new(matcher: Box<dyn TextMatcher>) -> Self {
        Self {
            state: Arc::new(RwLock::new(StoreState::default())),
            matcher: Arc::from(matcher),
        }
    }

    pub fn with_matcher(kind: TextMatcherKind) -> Self {
        Self::new(kind.build())
    }

    fn matches_search(&self, search: Option<&str>, fields: &[&str]) -> bool {
        match search {
            None => true,
            Some(needle) => fields.iter().any(|f| self.matcher.contains(f, needle)),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::with_matcher(TextMatcherKind::Native)
    }
}
