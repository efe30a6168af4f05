use async_trait::async_trait;
use tracing::{debug, info};
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::{Tag, TagType};
use crate::modules::tag::application::ports::incoming::use_cases::SyncTagsUseCase;
use crate::modules::tag::application::ports::outgoing::{
    TagQuery, TagQueryError, TagRepository, TagRepositoryError,
};
use crate::shared::outcome::Outcome;
use crate::shared::slug::slug_for;

#[derive(Debug, Clone)]
pub struct SyncTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> SyncTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn find_or_create(&self, title: &str) -> Outcome<Tag> {
        if let Some(existing) = self.query.find_by_title(title).await? {
            return Ok(existing);
        }

        let tag = Tag {
            id: Uuid::now_v7(),
            title: title.to_string(),
            tag_type: TagType::Default,
            icon: Some(String::new()),
            custom_colour: None,
            slug: slug_for(title),
        };

        match self.repository.create_tag(tag).await {
            Ok(created) => {
                info!(tag_id = %created.id, title = %created.title, "Tag created by sync");
                Ok(created)
            }
            // Lost a race against a concurrent writer: the row exists now.
            Err(TagRepositoryError::TitleAlreadyExists) => self
                .query
                .find_by_title(title)
                .await?
                .ok_or_else(|| TagQueryError::NotFound.into()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl<Q, R> SyncTagsUseCase for SyncTagsService<Q, R>
where
    Q: TagQuery,
    R: TagRepository,
{
    async fn execute(&self, names: Vec<String>) -> Outcome<Vec<Tag>> {
        let mut tags = Vec::with_capacity(names.len());

        for name in &names {
            let title = name.trim();
            if title.is_empty() {
                debug!("Skipping blank tag name");
                continue;
            }
            tags.push(self.find_or_create(title).await?);
        }

        Ok(tags)
    }
}
