use sea_orm::entity::prelude::*;

use crate::modules::project::application::domain::entities::{ImageType, ProjectImage};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "project_images")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Uuid")]
    pub project_id: Uuid,

    /// Stored file name.
    #[sea_orm(column_type = "Text")]
    pub image: String,

    #[sea_orm(column_name = "type")]
    pub image_type: String,

    #[sea_orm(column_name = "order", nullable)]
    pub sort_order: Option<i32>,

    pub is_optimised: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Rows with an unknown category are skipped by callers.
    pub fn to_image(&self) -> Option<ProjectImage> {
        let image_type: ImageType = self.image_type.parse().ok()?;

        Some(ProjectImage {
            id: self.id,
            project_id: self.project_id,
            image: self.image.clone(),
            image_type,
            order: self.sort_order,
            is_optimised: self.is_optimised,
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Projects,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use chrono::Utc;
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(Utc::now().into());
            }
        }

        Ok(self)
    }
}
