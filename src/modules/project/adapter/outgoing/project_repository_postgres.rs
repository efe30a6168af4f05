use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_images, project_repos, project_tags, projects,
};
use crate::modules::project::application::domain::entities::{Project, ProjectImage, ProjectRepo};
use crate::modules::project::application::domain::relation_sync::RelationChanges;
use crate::modules::project::application::ports::outgoing::{
    ProjectChangeset, ProjectRepository, ProjectRepositoryError,
};
use crate::shared::persistence::{is_unique_violation, rollback_logged};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn finish(
        txn: DatabaseTransaction,
        result: Result<(), ProjectRepositoryError>,
    ) -> Result<(), ProjectRepositoryError> {
        match result {
            Ok(()) => txn.commit().await.map_err(map_write_err),
            Err(e) => {
                rollback_logged(txn, "project").await;
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn insert_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_write_err)?;
        let result = insert_aggregate(&txn, changes).await;
        Self::finish(txn, result).await
    }

    async fn update_project(&self, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_write_err)?;
        let result = update_aggregate(&txn, changes).await;
        Self::finish(txn, result).await
    }

    async fn delete_project(&self, id: Uuid) -> Result<(), ProjectRepositoryError> {
        // Images, repositories and tag links cascade.
        let result = projects::Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn apply_image_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectImage>,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_write_err)?;
        let result = write_images(&txn, project_id, changes, Utc::now().fixed_offset()).await;
        Self::finish(txn, result).await
    }

    async fn apply_repository_changes(
        &self,
        project_id: Uuid,
        changes: RelationChanges<ProjectRepo>,
    ) -> Result<(), ProjectRepositoryError> {
        let txn = self.db.begin().await.map_err(map_write_err)?;
        let result = write_repos(&txn, project_id, changes, Utc::now().fixed_offset()).await;
        Self::finish(txn, result).await
    }

    async fn mark_image_optimised(
        &self,
        image_id: Uuid,
        stored_name: &str,
    ) -> Result<(), ProjectRepositoryError> {
        let result = project_images::Entity::update_many()
            .col_expr(project_images::Column::Image, Expr::value(stored_name))
            .col_expr(project_images::Column::IsOptimised, Expr::value(true))
            .col_expr(
                project_images::Column::UpdatedAt,
                Expr::value(Utc::now().fixed_offset()),
            )
            .filter(project_images::Column::Id.eq(image_id))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn set_slug(&self, id: Uuid, slug: &str) -> Result<(), ProjectRepositoryError> {
        let result = projects::Entity::update_many()
            .col_expr(projects::Column::Slug, Expr::value(slug))
            .filter(projects::Column::Id.eq(id))
            .exec(&*self.db)
            .await
            .map_err(map_write_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate writes (run inside the caller's transaction)
// ============================================================================

async fn insert_aggregate<C>(conn: &C, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError>
where
    C: ConnectionTrait,
{
    let now = Utc::now().fixed_offset();
    let project_id = changes.project.id;

    let mut row = project_columns(changes.project);
    row.created_at = Set(now);
    row.updated_at = Set(now);

    projects::Entity::insert(row)
        .exec_without_returning(conn)
        .await
        .map_err(map_write_err)?;

    write_tag_links(conn, project_id, changes.tag_ids).await?;
    write_images(conn, project_id, changes.images, now).await?;
    write_repos(conn, project_id, changes.repositories, now).await
}

async fn update_aggregate<C>(conn: &C, changes: ProjectChangeset) -> Result<(), ProjectRepositoryError>
where
    C: ConnectionTrait,
{
    let now = Utc::now().fixed_offset();
    let project_id = changes.project.id;

    let mut row = project_columns(changes.project);
    row.updated_at = Set(now);

    let result = projects::Entity::update_many()
        .set(row)
        .filter(projects::Column::Id.eq(project_id))
        .exec(conn)
        .await
        .map_err(map_write_err)?;

    if result.rows_affected == 0 {
        return Err(ProjectRepositoryError::NotFound);
    }

    project_tags::Entity::delete_many()
        .filter(project_tags::Column::ProjectId.eq(project_id))
        .exec(conn)
        .await
        .map_err(map_write_err)?;

    write_tag_links(conn, project_id, changes.tag_ids).await?;
    write_images(conn, project_id, changes.images, now).await?;
    write_repos(conn, project_id, changes.repositories, now).await
}

fn project_columns(project: Project) -> projects::ActiveModel {
    projects::ActiveModel {
        id: Set(project.id),
        title: Set(project.title),
        short_description: Set(project.short_description),
        description: Set(project.description),
        year: Set(project.year),
        website: Set(project.website),
        show_mockup: Set(project.show_mockup),
        company_id: Set(project.company_id),
        slug: Set(project.slug),
        ..Default::default()
    }
}

async fn write_tag_links<C>(
    conn: &C,
    project_id: Uuid,
    tag_ids: Vec<Uuid>,
) -> Result<(), ProjectRepositoryError>
where
    C: ConnectionTrait,
{
    if tag_ids.is_empty() {
        return Ok(());
    }

    let links = tag_ids.into_iter().map(|tag_id| project_tags::ActiveModel {
        project_id: Set(project_id),
        tag_id: Set(tag_id),
    });

    project_tags::Entity::insert_many(links)
        .exec_without_returning(conn)
        .await
        .map_err(map_write_err)?;
    Ok(())
}

async fn write_images<C>(
    conn: &C,
    project_id: Uuid,
    changes: RelationChanges<ProjectImage>,
    now: DateTime<FixedOffset>,
) -> Result<(), ProjectRepositoryError>
where
    C: ConnectionTrait,
{
    if !changes.delete_ids.is_empty() {
        project_images::Entity::delete_many()
            .filter(project_images::Column::ProjectId.eq(project_id))
            .filter(project_images::Column::Id.is_in(changes.delete_ids))
            .exec(conn)
            .await
            .map_err(map_write_err)?;
    }

    for (id, order) in changes.reorder {
        project_images::Entity::update_many()
            .col_expr(project_images::Column::SortOrder, Expr::value(order))
            .col_expr(project_images::Column::UpdatedAt, Expr::value(now))
            .filter(project_images::Column::Id.eq(id))
            .filter(project_images::Column::ProjectId.eq(project_id))
            .exec(conn)
            .await
            .map_err(map_write_err)?;
    }

    if !changes.create.is_empty() {
        let rows = changes.create.into_iter().map(|image| project_images::ActiveModel {
            id: Set(image.id),
            project_id: Set(project_id),
            image: Set(image.image),
            image_type: Set(image.image_type.as_str().to_string()),
            sort_order: Set(image.order),
            is_optimised: Set(image.is_optimised),
            created_at: Set(now),
            updated_at: Set(now),
        });

        project_images::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(map_write_err)?;
    }

    Ok(())
}

async fn write_repos<C>(
    conn: &C,
    project_id: Uuid,
    changes: RelationChanges<ProjectRepo>,
    now: DateTime<FixedOffset>,
) -> Result<(), ProjectRepositoryError>
where
    C: ConnectionTrait,
{
    if !changes.delete_ids.is_empty() {
        project_repos::Entity::delete_many()
            .filter(project_repos::Column::ProjectId.eq(project_id))
            .filter(project_repos::Column::Id.is_in(changes.delete_ids))
            .exec(conn)
            .await
            .map_err(map_write_err)?;
    }

    for (id, order) in changes.reorder {
        project_repos::Entity::update_many()
            .col_expr(project_repos::Column::SortOrder, Expr::value(order))
            .col_expr(project_repos::Column::UpdatedAt, Expr::value(now))
            .filter(project_repos::Column::Id.eq(id))
            .filter(project_repos::Column::ProjectId.eq(project_id))
            .exec(conn)
            .await
            .map_err(map_write_err)?;
    }

    if !changes.create.is_empty() {
        let rows = changes.create.into_iter().map(|repo| project_repos::ActiveModel {
            id: Set(repo.id),
            project_id: Set(project_id),
            title: Set(repo.title),
            url: Set(repo.url),
            sort_order: Set(repo.order),
            created_at: Set(now),
            updated_at: Set(now),
        });

        project_repos::Entity::insert_many(rows)
            .exec_without_returning(conn)
            .await
            .map_err(map_write_err)?;
    }

    Ok(())
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_write_err(e: DbErr) -> ProjectRepositoryError {
    if is_unique_violation(&e, "slug") {
        ProjectRepositoryError::SlugAlreadyExists
    } else if is_unique_violation(&e, "title") {
        ProjectRepositoryError::TitleAlreadyExists
    } else {
        error!(error = %e, "Project write failed");
        ProjectRepositoryError::DatabaseError(e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
