use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::project::application::domain::entities::ProjectView;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetRelatedProjectsUseCase, RELATED_LIMIT,
};
use crate::modules::project::application::ports::outgoing::ProjectQuery;
use crate::shared::outcome::Outcome;

pub struct GetRelatedProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetRelatedProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetRelatedProjectsUseCase for GetRelatedProjectsService<Q>
where
    Q: ProjectQuery,
{
    async fn execute(&self, id: Uuid) -> Outcome<Vec<ProjectView>> {
        // An unknown id has no tags, so it has no related projects either.
        let mut overlaps = self.query.tag_overlaps(id).await?;
        // Stable: equal counts keep store order.
        overlaps.sort_by(|a, b| b.shared.cmp(&a.shared));

        let mut related = Vec::with_capacity(RELATED_LIMIT);
        for overlap in overlaps.into_iter().take(RELATED_LIMIT) {
            related.push(self.query.get_by_id(overlap.project_id).await?);
        }

        Ok(related)
    }
}
