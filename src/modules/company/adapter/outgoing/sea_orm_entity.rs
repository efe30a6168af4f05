use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::company::application::domain::entities::Company;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", unique)]
    pub name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(nullable)]
    pub website: Option<String>,

    /// Stored file name.
    #[sea_orm(nullable)]
    pub logo: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub slug: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_company(&self) -> Company {
        Company {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            website: self.website.clone(),
            logo: self.logo.clone(),
            slug: self.slug.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity")]
    Projects,
}

impl Related<crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity>
    for Entity
{
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
        if let sea_orm::ActiveValue::Set(name) = &self.name {
            self.name = sea_orm::ActiveValue::Set(name.trim().to_string());
        }

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
