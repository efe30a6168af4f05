use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{Column, Entity};
use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::outgoing::{CompanyQuery, CompanyQueryError};
use crate::shared::persistence::{ilike_contains, lower_eq};
use crate::shared::slug::normalize_slug;

#[derive(Debug, Clone)]
pub struct CompanyQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyQuery for CompanyQueryPostgres {
    async fn list(&self, search: Option<String>) -> Result<Vec<Company>, CompanyQueryError> {
        let mut query = Entity::find();

        if let Some(search) = search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(ilike_contains(Column::Name, search))
                    .add(ilike_contains(Column::Description, search)),
            );
        }

        let models = query
            .order_by_asc(Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_company()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Company, CompanyQueryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_company())
            .ok_or(CompanyQueryError::NotFound)
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Company, CompanyQueryError> {
        Entity::find()
            .filter(Column::Slug.eq(normalize_slug(slug)))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(|m| m.to_company())
            .ok_or(CompanyQueryError::NotFound)
    }

    async fn name_exists(
        &self,
        name: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, CompanyQueryError> {
        let mut query = Entity::find().filter(lower_eq(Column::Name, name));

        if let Some(id) = exclude {
            query = query.filter(Column::Id.ne(id));
        }

        Ok(query.one(&*self.db).await.map_err(map_db_err)?.is_some())
    }
}

fn map_db_err(e: DbErr) -> CompanyQueryError {
    CompanyQueryError::DatabaseError(e.to_string())
}
