use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::modules::project::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 200)]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub short_description: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub year: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub website: Option<String>,

    pub show_mockup: bool,

    #[sea_orm(column_type = "Uuid", nullable)]
    pub company_id: Option<Uuid>,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_project(&self) -> Project {
        Project {
            id: self.id,
            title: self.title.clone(),
            short_description: self.short_description.clone(),
            description: self.description.clone(),
            year: self.year,
            website: self.website.clone(),
            show_mockup: self.show_mockup,
            company_id: self.company_id,
            slug: self.slug.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::modules::company::adapter::outgoing::sea_orm_entity::Entity",
        from = "Column::CompanyId",
        to = "crate::modules::company::adapter::outgoing::sea_orm_entity::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Companies,

    #[sea_orm(has_many = "super::project_images::Entity")]
    ProjectImages,

    #[sea_orm(has_many = "super::project_repos::Entity")]
    ProjectRepos,

    #[sea_orm(has_many = "super::project_tags::Entity")]
    ProjectTags,
}

impl Related<crate::modules::company::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::project_images::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectImages.def()
    }
}

impl Related<super::project_repos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectRepos.def()
    }
}

// Many-to-many: projects <-> tags via project_tags
impl Related<crate::modules::tag::adapter::outgoing::sea_orm_entity::Entity> for Entity {
    fn to() -> RelationDef {
        super::project_tags::Relation::Tags.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::project_tags::Relation::Projects.def().rev())
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(slug) = &self.slug {
            self.slug = Set(slug.trim().to_lowercase());
        }

        if let ActiveValue::Set(title) = &self.title {
            self.title = Set(title.trim().to_string());
        }

        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
