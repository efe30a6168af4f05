use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel as CompanyActiveModel, Column, Entity};
use crate::modules::company::application::domain::entities::Company;
use crate::modules::company::application::ports::outgoing::{
    CompanyRepository, CompanyRepositoryError,
};
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects;
use crate::shared::persistence::{is_unique_violation, rollback_logged};

#[derive(Debug, Clone)]
pub struct CompanyRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn detach_and_delete<C>(conn: &C, id: Uuid) -> Result<(), CompanyRepositoryError>
    where
        C: ConnectionTrait,
    {
        projects::Entity::update_many()
            .col_expr(projects::Column::CompanyId, Expr::value(Option::<Uuid>::None))
            .filter(projects::Column::CompanyId.eq(id))
            .exec(conn)
            .await
            .map_err(map_write_err)?;

        let result = Entity::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(CompanyRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn active_from(company: Company) -> CompanyActiveModel {
    CompanyActiveModel {
        id: Set(company.id),
        name: Set(company.name),
        description: Set(company.description),
        website: Set(company.website),
        logo: Set(company.logo),
        slug: Set(company.slug),
        ..Default::default()
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryPostgres {
    async fn create_company(&self, company: Company) -> Result<Company, CompanyRepositoryError> {
        let now = Utc::now().fixed_offset();
        let mut active = active_from(company);
        active.created_at = Set(now);
        active.updated_at = Set(now);

        let inserted = active.insert(&*self.db).await.map_err(map_write_err)?;
        Ok(inserted.to_company())
    }

    async fn update_company(&self, company: Company) -> Result<Company, CompanyRepositoryError> {
        let updated = active_from(company)
            .update(&*self.db)
            .await
            .map_err(map_write_err)?;
        Ok(updated.to_company())
    }

    async fn delete_company(&self, id: Uuid) -> Result<(), CompanyRepositoryError> {
        let txn = self.db.begin().await.map_err(map_write_err)?;

        if let Err(e) = Self::detach_and_delete(&txn, id).await {
            rollback_logged(txn, "company").await;
            return Err(e);
        }

        txn.commit().await.map_err(map_write_err)
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), CompanyRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::Slug, Expr::value(slug))
            .filter(Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(CompanyRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_write_err(e: DbErr) -> CompanyRepositoryError {
    match e {
        DbErr::RecordNotUpdated => CompanyRepositoryError::NotFound,
        e if is_unique_violation(&e, "slug") => CompanyRepositoryError::SlugAlreadyExists,
        e if is_unique_violation(&e, "name") => CompanyRepositoryError::NameAlreadyExists,
        e => {
            error!(error = %e, "Company write failed");
            CompanyRepositoryError::DatabaseError(e.to_string())
        }
    }
}
