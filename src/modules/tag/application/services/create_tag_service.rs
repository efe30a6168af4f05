use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::{Tag, TagDraft};
use crate::modules::tag::application::ports::incoming::use_cases::CreateTagUseCase;
use crate::modules::tag::application::ports::outgoing::{
    TagQuery, TagRepository, TagRepositoryError,
};
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

#[derive(Debug, Clone)]
pub struct CreateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTagUseCase for CreateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(&self, draft: TagDraft) -> Outcome<Tag> {
        if self.query.title_exists(draft.title(), None).await? {
            return Err(TagRepositoryError::TitleAlreadyExists.into());
        }

        let slug = slug_for(draft.title());
        let tag = self
            .repository
            .create_tag(draft.into_tag(Uuid::now_v7(), slug))
            .await?;

        info!(tag_id = %tag.id, slug = %tag.slug, "Tag created");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory_store::MemoryStore;
    use crate::modules::tag::application::domain::entities::TagType;
    use crate::shared::outcome::FailureKind;

    fn draft(title: &str) -> TagDraft {
        TagDraft::new(title.to_string(), TagType::Backend, Some("rust.svg".into()), None).unwrap()
    }

    #[tokio::test]
    async fn creates_tag_with_slug() {
        let store = MemoryStore::default();
        let service = CreateTagService::new(store.clone(), store);

        let tag = service.execute(draft("Actix Web")).await.unwrap();

        assert_eq!(tag.title, "Actix Web");
        assert_eq!(tag.slug, "actix-web");
        assert_eq!(tag.tag_type, TagType::Backend);
    }

    #[tokio::test]
    async fn duplicate_title_is_conflict() {
        let store = MemoryStore::default();
        let service = CreateTagService::new(store.clone(), store);

        service.execute(draft("Rust")).await.unwrap();
        let err = service.execute(draft("rUST")).await.unwrap_err();

        assert_eq!(err.kind, FailureKind::Conflict);
        assert_eq!(err.message, "A tag with the same title already exists.");
    }
}
