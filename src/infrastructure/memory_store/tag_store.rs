use async_trait::async_trait;
use uuid::Uuid;

use super::MemoryStore;
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{
    TagQuery, TagQueryError, TagRepository, TagRepositoryError,
};
use crate::shared::slug::normalize_slug;

impl MemoryStore {
    fn tag_conflict(&self, tags: &[Tag], candidate: &Tag) -> Option<TagRepositoryError> {
        let others = tags.iter().filter(|t| t.id != candidate.id);

        for other in others {
            if self.matcher.equals(&other.title, &candidate.title) {
                return Some(TagRepositoryError::TitleAlreadyExists);
            }
            if !candidate.slug.is_empty() && other.slug == candidate.slug {
                return Some(TagRepositoryError::SlugAlreadyExists);
            }
        }
        None
    }
}

#[async_trait]
impl TagQuery for MemoryStore {
    async fn list(&self, search: Option<String>) -> Result<Vec<Tag>, TagQueryError> {
        let state = self.state.read().await;

        let mut tags: Vec<Tag> = state
            .tags
            .iter()
            .filter(|t| self.matches_search(search.as_deref(), &[t.title.as_str()]))
            .cloned()
            .collect();
        tags.sort_by_key(|t| t.title.to_lowercase());

        Ok(tags)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, TagQueryError> {
        let state = self.state.read().await;
        state
            .tags
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TagQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Tag, TagQueryError> {
        let slug = normalize_slug(slug);
        let state = self.state.read().await;
        state
            .tags
            .iter()
            .find(|t| t.slug == slug)
            .cloned()
            .ok_or(TagQueryError::NotFound)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagQueryError> {
        let state = self.state.read().await;
        Ok(state
            .tags
            .iter()
            .find(|t| self.matcher.equals(&t.title, title))
            .cloned())
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, TagQueryError> {
        let state = self.state.read().await;
        Ok(state
            .tags
            .iter()
            .any(|t| Some(t.id) != exclude && self.matcher.equals(&t.title, title)))
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn create_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.tag_conflict(&state.tags, &tag) {
            return Err(err);
        }

        state.tags.push(tag.clone());
        Ok(tag)
    }

    async fn update_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError> {
        let mut state = self.state.write().await;

        if let Some(err) = self.tag_conflict(&state.tags, &tag) {
            return Err(err);
        }

        let slot = state
            .tags
            .iter_mut()
            .find(|t| t.id == tag.id)
            .ok_or(TagRepositoryError::NotFound)?;
        *slot = tag.clone();

        Ok(tag)
    }

    async fn delete_tag(&self, id: Uuid) -> Result<(), TagRepositoryError> {
        let mut state = self.state.write().await;

        let before = state.tags.len();
        state.tags.retain(|t| t.id != id);
        if state.tags.len() == before {
            return Err(TagRepositoryError::NotFound);
        }

        state.project_tags.retain(|(_, tag_id)| *tag_id != id);
        Ok(())
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), TagRepositoryError> {
        let mut state = self.state.write().await;

        if state.tags.iter().any(|t| t.id != id && t.slug == slug) {
            return Err(TagRepositoryError::SlugAlreadyExists);
        }

        let tag = state
            .tags
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TagRepositoryError::NotFound)?;
        tag.slug = slug.to_string();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tag::application::domain::entities::TagType;

    fn tag(title: &str, slug: &str) -> Tag {
        Tag {
            id: Uuid::now_v7(),
            title: title.to_string(),
            tag_type: TagType::Default,
            icon: None,
            custom_colour: None,
            slug: slug.to_string(),
        }
    }

    #[tokio::test]
    async fn slug_lookup_ignores_case_and_padding() {
        let store = MemoryStore::default();
        let rust = store.create_tag(tag("Rust", "rust")).await.unwrap();

        assert_eq!(TagQuery::get_by_slug(&store, "RUST ").await.unwrap().id, rust.id);
        assert_eq!(
            TagQuery::get_by_slug(&store, "go").await.unwrap_err(),
            TagQueryError::NotFound
        );
    }

    #[tokio::test]
    async fn title_uniqueness_is_case_insensitive() {
        let store = MemoryStore::default();
        store.create_tag(tag("Rust", "rust")).await.unwrap();

        let err = store.create_tag(tag("RUST", "rust-2")).await.unwrap_err();
        assert_eq!(err, TagRepositoryError::TitleAlreadyExists);

        let err = store.create_tag(tag("Rust lang", "rust")).await.unwrap_err();
        assert_eq!(err, TagRepositoryError::SlugAlreadyExists);
    }

    #[tokio::test]
    async fn list_sorts_by_title_and_filters() {
        let store = MemoryStore::default();
        store.create_tag(tag("vue", "vue")).await.unwrap();
        store.create_tag(tag("Angular", "angular")).await.unwrap();
        store.create_tag(tag("React", "react")).await.unwrap();

        let all = store.list(None).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Angular", "React", "vue"]);

        let found = store.list(Some("RE".into())).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "React");
    }

    #[tokio::test]
    async fn delete_drops_project_links() {
        let store = MemoryStore::default();
        let t = store.create_tag(tag("Go", "go")).await.unwrap();
        store
            .state
            .write()
            .await
            .project_tags
            .push((Uuid::now_v7(), t.id));

        store.delete_tag(t.id).await.unwrap();

        assert!(store.state.read().await.project_tags.is_empty());
        assert_eq!(
            store.delete_tag(t.id).await,
            Err(TagRepositoryError::NotFound)
        );
    }
}
