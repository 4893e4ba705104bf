//! Event database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{event::empty_value, Event};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Json", nullable)]
    pub value: Option<Json>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Event {
    fn from(model: Model) -> Self {
        Event {
            id: model.id,
            name: model.name,
            // A NULL payload reads back as the empty default
            value: model.value.unwrap_or_else(empty_value),
            created_at: model.created_at,
        }
    }
}
