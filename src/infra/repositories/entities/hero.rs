//! Hero database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Hero;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "heroes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub alias: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub powers: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Hero {
    fn from(model: Model) -> Self {
        Hero {
            id: model.id,
            name: model.name,
            alias: model.alias,
            powers: model.powers,
        }
    }
}
