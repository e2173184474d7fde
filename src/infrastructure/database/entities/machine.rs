//! Machine entity

use crate::domain::Machine;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "machines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::status_log::Entity")]
    StatusLog,
}

impl Related<super::status_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StatusLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert database model to domain machine
    pub fn to_machine(&self) -> Machine {
        Machine {
            id: self.id,
            name: self.name.clone(),
            location: self.location.clone(),
            created_at: self.created_at,
        }
    }
}
