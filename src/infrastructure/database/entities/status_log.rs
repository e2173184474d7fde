//! Status log entity
//!
//! Rows are append-only: they are inserted once, never updated, and only
//! removed by the cascade when the owning machine row is deleted.

use crate::domain::{MachineStatus, StatusObservation};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "status_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub machine_id: i32,

    pub status: MachineStatus,

    #[sea_orm(indexed)]
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::machine::Entity",
        from = "Column::MachineId",
        to = "super::machine::Column::Id"
    )]
    Machine,
}

impl Related<super::machine::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Machine.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert database model to domain observation
    pub fn to_observation(&self) -> StatusObservation {
        StatusObservation {
            id: self.id,
            machine_id: self.machine_id,
            status: self.status,
            timestamp: self.timestamp,
        }
    }
}
