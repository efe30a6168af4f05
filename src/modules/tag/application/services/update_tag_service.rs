use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::{Tag, TagDraft};
use crate::modules::tag::application::ports::incoming::use_cases::UpdateTagUseCase;
use crate::modules::tag::application::ports::outgoing::{
    TagQuery, TagRepository, TagRepositoryError,
};
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

#[derive(Debug, Clone)]
pub struct UpdateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTagUseCase for UpdateTagService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(&self, id: Uuid, draft: TagDraft) -> Outcome<Tag> {
        self.query.get_by_id(id).await?;

        if self.query.title_exists(draft.title(), Some(id)).await? {
            return Err(TagRepositoryError::TitleAlreadyExists.into());
        }

        let slug = slug_for(draft.title());
        let tag = self.repository.update_tag(draft.into_tag(id, slug)).await?;

        info!(tag_id = %tag.id, "Tag updated");
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
        TagDraft::new(title.to_string(), TagType::Frontend, None, Some("#61dafb".into())).unwrap()
    }

    async fn seed(store: &MemoryStore, title: &str) -> Tag {
        store
            .create_tag(draft(title).into_tag(Uuid::now_v7(), slug_for(title)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn regenerates_slug_and_allows_same_title_on_self() {
        let store = MemoryStore::default();
        let tag = seed(&store, "React").await;
        let service = UpdateTagService::new(store.clone(), store);

        let same = service.execute(tag.id, draft("REACT")).await.unwrap();
        assert_eq!(same.title, "REACT");
        assert_eq!(same.slug, "react");

        let renamed = service.execute(tag.id, draft("React Native")).await.unwrap();
        assert_eq!(renamed.slug, "react-native");
        assert_eq!(renamed.custom_colour.as_deref(), Some("#61dafb"));
    }

    #[tokio::test]
    async fn title_of_another_tag_is_conflict() {
        let store = MemoryStore::default();
        seed(&store, "Vue").await;
        let svelte = seed(&store, "Svelte").await;
        let service = UpdateTagService::new(store.clone(), store);

        let err = service.execute(svelte.id, draft("vue")).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::Conflict);
    }

    #[tokio::test]
    async fn missing_tag_is_not_found() {
        let store = MemoryStore::default();
        let service = UpdateTagService::new(store.clone(), store);

        let err = service.execute(Uuid::now_v7(), draft("Go")).await.unwrap_err();
        assert_eq!(err.kind, FailureKind::NotFound);
        assert_eq!(err.message, "Tag not found.");
    }
}
