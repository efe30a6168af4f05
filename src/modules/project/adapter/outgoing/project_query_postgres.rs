use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_images, project_repos, project_tags, projects,
};
use crate::modules::project::application::domain::entities::{
    ProjectImage, ProjectRepo, ProjectView,
};
use crate::modules::project::application::domain::relation_sync::sort_children;
use crate::modules::project::application::ports::outgoing::{
    ProjectFilter, ProjectQuery, ProjectQueryError, TagOverlap,
};
use crate::modules::tag::adapter::outgoing::sea_orm_entity as tags;
use crate::modules::tag::application::domain::entities::Tag;
use crate::shared::persistence::{ilike_contains, lower_eq};
use crate::shared::slug::normalize_slug;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Loads tags, images and repositories for `models`, keeping their order.
    /// Issues one query per relation regardless of how many projects.
    async fn load_views(
        &self,
        models: Vec<projects::Model>,
    ) -> Result<Vec<ProjectView>, ProjectQueryError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();

        let links = project_tags::Entity::find()
            .filter(project_tags::Column::ProjectId.is_in(ids.clone()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let tag_ids: Vec<Uuid> = links.iter().map(|l| l.tag_id).collect();
        let tags_by_id: HashMap<Uuid, Tag> = if tag_ids.is_empty() {
            HashMap::new()
        } else {
            tags::Entity::find()
                .filter(tags::Column::Id.is_in(tag_ids))
                .all(&*self.db)
                .await
                .map_err(map_db_err)?
                .iter()
                .map(|m| (m.id, m.to_tag()))
                .collect()
        };

        let mut images_by_project: HashMap<Uuid, Vec<ProjectImage>> = HashMap::new();
        for image in project_images::Entity::find()
            .filter(project_images::Column::ProjectId.is_in(ids.clone()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .filter_map(|m| m.to_image())
        {
            images_by_project.entry(image.project_id).or_default().push(image);
        }

        let mut repos_by_project: HashMap<Uuid, Vec<ProjectRepo>> = HashMap::new();
        for repo in project_repos::Entity::find()
            .filter(project_repos::Column::ProjectId.is_in(ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
        {
            repos_by_project
                .entry(repo.project_id)
                .or_default()
                .push(repo.to_repo());
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let mut project_tags: Vec<Tag> = links
                    .iter()
                    .filter(|l| l.project_id == model.id)
                    .filter_map(|l| tags_by_id.get(&l.tag_id).cloned())
                    .collect();
                project_tags.sort_by_key(|t| t.title.to_lowercase());

                let mut images = images_by_project.remove(&model.id).unwrap_or_default();
                sort_children(&mut images);

                let mut repositories = repos_by_project.remove(&model.id).unwrap_or_default();
                sort_children(&mut repositories);

                ProjectView {
                    project: model.to_project(),
                    tags: project_tags,
                    images,
                    repositories,
                }
            })
            .collect())
    }

    async fn load_one(&self, model: projects::Model) -> Result<ProjectView, ProjectQueryError> {
        self.load_views(vec![model])
            .await?
            .pop()
            .ok_or(ProjectQueryError::NotFound)
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(&self, filter: ProjectFilter) -> Result<Vec<ProjectView>, ProjectQueryError> {
        let mut query = projects::Entity::find();

        if let Some(search) = filter.search.as_deref() {
            query = query.filter(
                Condition::any()
                    .add(ilike_contains(projects::Column::Title, search))
                    .add(ilike_contains(projects::Column::ShortDescription, search)),
            );
        }

        let models = query
            .order_by_desc(projects::Column::Year)
            .order_by_asc(projects::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        self.load_views(models).await
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ProjectView, ProjectQueryError> {
        let model = projects::Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        self.load_one(model).await
    }

    async fn get_by_slug(&self, slug: &str) -> Result<ProjectView, ProjectQueryError> {
        let model = projects::Entity::find()
            .filter(projects::Column::Slug.eq(normalize_slug(slug)))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        self.load_one(model).await
    }

    async fn exists(&self, id: Uuid) -> Result<bool, ProjectQueryError> {
        let count = projects::Entity::find_by_id(id)
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn title_exists(
        &self,
        title: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, ProjectQueryError> {
        let mut query = projects::Entity::find().filter(lower_eq(projects::Column::Title, title));

        if let Some(id) = exclude {
            query = query.filter(projects::Column::Id.ne(id));
        }

        let count = query.count(&*self.db).await.map_err(map_db_err)?;
        Ok(count > 0)
    }

    async fn tag_overlaps(&self, project_id: Uuid) -> Result<Vec<TagOverlap>, ProjectQueryError> {
        let subject_tags = project_tags::Entity::find()
            .filter(project_tags::Column::ProjectId.eq(project_id))
            .select_only()
            .column(project_tags::Column::TagId)
            .into_tuple::<Uuid>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if subject_tags.is_empty() {
            return Ok(Vec::new());
        }

        let rows = project_tags::Entity::find()
            .select_only()
            .column(project_tags::Column::ProjectId)
            .column_as(Expr::col(project_tags::Column::TagId).count(), "shared")
            .filter(project_tags::Column::TagId.is_in(subject_tags))
            .filter(project_tags::Column::ProjectId.ne(project_id))
            .group_by(project_tags::Column::ProjectId)
            .order_by_asc(project_tags::Column::ProjectId)
            .into_tuple::<(Uuid, i64)>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows
            .into_iter()
            .map(|(project_id, shared)| TagOverlap {
                project_id,
                shared: shared.max(0) as usize,
            })
            .collect())
    }

    async fn images(&self, project_id: Uuid) -> Result<Vec<ProjectImage>, ProjectQueryError> {
        let mut images: Vec<ProjectImage> = project_images::Entity::find()
            .filter(project_images::Column::ProjectId.eq(project_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .filter_map(|m| m.to_image())
            .collect();

        sort_children(&mut images);
        Ok(images)
    }

    async fn repositories(&self, project_id: Uuid) -> Result<Vec<ProjectRepo>, ProjectQueryError> {
        let mut repos: Vec<ProjectRepo> = project_repos::Entity::find()
            .filter(project_repos::Column::ProjectId.eq(project_id))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .map(|m| m.to_repo())
            .collect();

        sort_children(&mut repos);
        Ok(repos)
    }

    async fn unoptimised_images(&self) -> Result<Vec<ProjectImage>, ProjectQueryError> {
        let images = project_images::Entity::find()
            .filter(project_images::Column::IsOptimised.eq(false))
            .order_by_asc(project_images::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .iter()
            .filter_map(|m| m.to_image())
            .collect();

        Ok(images)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
