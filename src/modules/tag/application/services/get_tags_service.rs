use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::{GetTagUseCase, GetTagsUseCase};
use crate::modules::tag::application::ports::outgoing::TagQuery;
use crate::shared::outcome::Outcome;
use crate::shared::text_match::normalize_search;

#[derive(Debug, Clone)]
pub struct GetTagsService<Q: TagQuery> {
    query: Q,
}

impl<Q: TagQuery> GetTagsService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: TagQuery> GetTagsUseCase for GetTagsService<Q> {
    async fn execute(&self, search: Option<String>) -> Outcome<Vec<Tag>> {
        Ok(self.query.list(normalize_search(search)).await?)
    }
}

#[derive(Debug, Clone)]
pub struct GetTagService<Q: TagQuery> {
    query: Q,
}

impl<Q: TagQuery> GetTagService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: TagQuery> GetTagUseCase for GetTagService<Q> {
    async fn by_id(&self, id: Uuid) -> Outcome<Tag> {
        Ok(self.query.get_by_id(id).await?)
    }

    async fn by_slug(&self, slug: &str) -> Outcome<Tag> {
        Ok(self.query.get_by_slug(slug).await?)
    }
}
