use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel as TagActiveModel, Column, Entity};
use crate::modules::tag::application::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};
use crate::shared::persistence::is_unique_violation;

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn active_from(tag: Tag) -> TagActiveModel {
    TagActiveModel {
        id: Set(tag.id),
        title: Set(tag.title),
        tag_type: Set(tag.tag_type.as_str().to_string()),
        icon: Set(tag.icon),
        custom_colour: Set(tag.custom_colour),
        slug: Set(tag.slug),
        ..Default::default()
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn create_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = active_from(tag);
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let inserted = active.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(inserted.to_tag())
    }

    async fn update_tag(&self, tag: Tag) -> Result<Tag, TagRepositoryError> {
        let updated = active_from(tag)
            .update(&*self.db)
            .await
            .map_err(map_write_err)?;
        Ok(updated.to_tag())
    }

    async fn delete_tag(&self, id: Uuid) -> Result<(), TagRepositoryError> {
        // project_tags rows go with it (ON DELETE CASCADE).
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(TagRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), TagRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Slug, Expr::value(slug))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(TagRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_write_err(e: DbErr) -> TagRepositoryError {
    match e {
        DbErr::RecordNotUpdated => TagRepositoryError::NotFound,
        e if is_unique_violation(&e, "slug") => TagRepositoryError::SlugAlreadyExists,
        e if is_unique_violation(&e, "title") => TagRepositoryError::TitleAlreadyExists,
        e => {
            error!(error = %e, "Tag write failed");
            TagRepositoryError::DatabaseError(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::tag::adapter::outgoing::sea_orm_entity::Model;
    use crate::modules::tag::application::domain::entities::TagType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn tag(title: &str) -> Tag {
        Tag {
            id: Uuid::now_v7(),
            title: title.to_string(),
            tag_type: TagType::Cms,
            icon: None,
            custom_colour: Some("#ff0000".to_string()),
            slug: title.to_lowercase(),
        }
    }

    fn model_of(tag: &Tag) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: tag.id,
            title: tag.title.clone(),
            tag_type: tag.tag_type.as_str().to_string(),
            icon: tag.icon.clone(),
            custom_colour: tag.custom_colour.clone(),
            slug: tag.slug.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_round_trips_the_row() {
        let input = tag("Strapi");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model_of(&input)]])
            .into_connection();

        let created = TagRepositoryPostgres::new(Arc::new(db))
            .create_tag(input.clone())
            .await
            .unwrap();

        assert_eq!(created, input);
    }

    #[tokio::test]
    async fn duplicate_title_maps_to_title_conflict() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"tags_title_lower_key\"".into(),
            ))])
            .into_connection();

        let result = TagRepositoryPostgres::new(Arc::new(db))
            .create_tag(tag("Rust"))
            .await;

        assert_eq!(result, Err(TagRepositoryError::TitleAlreadyExists));
    }

    #[tokio::test]
    async fn delete_of_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = TagRepositoryPostgres::new(Arc::new(db))
            .delete_tag(Uuid::now_v7())
            .await;

        assert_eq!(result, Err(TagRepositoryError::NotFound));
    }

    #[tokio::test]
    async fn set_slug_updates_one_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let result = TagRepositoryPostgres::new(Arc::new(db))
            .set_slug(Uuid::now_v7(), "rust")
            .await;

        assert!(result.is_ok());
    }
}
