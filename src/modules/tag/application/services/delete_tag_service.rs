use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::incoming::use_cases::DeleteTagUseCase;
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagRepository};
use crate::shared::outcome::Outcome;

#[derive(Debug, Clone)]
pub struct DeleteTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTagUseCase for DeleteTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(&self, id: Uuid) -> Outcome<Tag> {
        let tag = self.query.get_by_id(id).await?;
        self.repository.delete_tag(id).await?;

        info!(tag_id = %id, "Tag deleted");
        Ok(tag)
    }
}
