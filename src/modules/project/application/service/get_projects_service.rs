use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectFilter, ProjectQuery};
use crate::shared::outcome::Outcome;
use crate::shared::text_match::normalize_search;

// ============================================================================
// List
// ============================================================================

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, filter: ProjectFilter) -> Outcome<Vec<ProjectView>> {
        let filter = ProjectFilter {
            search: normalize_search(filter.search),
        };
        Ok(self.query.list(filter).await?)
    }
}

// ============================================================================
// Single
// ============================================================================

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    async fn by_id(&self, id: Uuid) -> Outcome<ProjectView> {
        Ok(self.query.get_by_id(id).await?)
    }

    async fn by_slug(&self, slug: &str) -> Outcome<ProjectView> {
        Ok(self.query.get_by_slug(slug).await?)
    }
}
