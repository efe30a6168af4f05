use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column, Entity};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{TagQuery, TagQueryError};
use crate::shared::persistence::{ilike_contains, lower_eq};
use crate::shared::slug::normalize_slug;

#[derive(Debug, Clone)]
pub struct TagQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagQuery for TagQueryPostgres {
    async fn list(&self, search: Option<String>) -> Result<Vec<Tag>, TagQueryError> {
        let mut query = Entity::find();

        if let Some(search) = search.as_deref() {
            query = query.filter(ilike_contains(Column::Title, search));
        }

        let models = query
            .order_by_asc(Column::Title)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_tag()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, TagQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_tag())
            .ok_or(TagQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Tag, TagQueryError> {
        Entity::find()
            .filter(Column::Slug.eq(normalize_slug(slug)))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_tag())
            .ok_or(TagQueryError::NotFound)
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Tag>, TagQueryError> {
        let model = Entity::find()
            .filter(lower_eq(Column::Title, title))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_tag()))
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, TagQueryError> {
        let mut query = Entity::find().filter(lower_eq(Column::Title, title));

        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }

        let found = query.one(&*self.db).await.map_err(map_db_err)?;
        Ok(found.is_some())
    }
}

fn map_db_err(e: DbErr) -> TagQueryError {
    TagQueryError::DatabaseError(e.to_string())
}
