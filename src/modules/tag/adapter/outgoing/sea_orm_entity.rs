use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::tag::application::domain::entities::{Tag, TagType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub title: String,

    #[sea_orm(column_name = "type")]
    pub tag_type: String,

    #[sea_orm(nullable)]
    pub icon: Option<String>,

    #[sea_orm(nullable)]
    pub custom_colour: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    /// Unknown stored types read back as `Default`.
    pub fn to_tag(&self) -> Tag {
        Tag {
            id: self.id,
            title: self.title.clone(),
            tag_type: self.tag_type.parse().unwrap_or(TagType::Default),
            icon: self.icon.clone(),
            custom_colour: self.custom_colour.clone(),
            slug: self.slug.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::project_tags::Entity"
    )]
    ProjectTags,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::project_tags::Entity>
    for Entity
{
    fn to() -> RelationDef {
        Relation::ProjectTags.def()
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
