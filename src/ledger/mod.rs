//! Status ledger - the append-only log of status observations and the
//! queries over it.
//!
//! Rows are inserted once and never touched again; every view (current
//! status, recent window, full series) is derived from the same sorted
//! sequence at read time. Ordering is `timestamp` with the row id as the
//! tie-break, so when the clock granularity collides the most recently
//! appended observation wins.

mod error;

pub use error::{LedgerError, LedgerResult};

use crate::domain::{MachineStatus, StatusObservation};
use crate::infrastructure::database::entities::{status_log, StatusLog, StatusLogActive};
use crate::registry::MachineRegistry;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::str::FromStr;
use tracing::{debug, instrument};

/// History window for the machine detail view
pub const DETAIL_HISTORY_LIMIT: u64 = 5;

/// Append status observations and answer history queries.
#[derive(Clone)]
pub struct StatusLedger {
    db: DatabaseConnection,
    registry: MachineRegistry,
}

impl StatusLedger {
    pub fn new(db: DatabaseConnection, registry: MachineRegistry) -> Self {
        Self { db, registry }
    }

    /// Append one observation for a machine.
    ///
    /// The machine must already exist - the registry is consulted before
    /// anything is written. Prior observations are never mutated.
    #[instrument(skip(self))]
    pub async fn append(&self, machine_id: i32, status: &str) -> LedgerResult<StatusObservation> {
        let status = MachineStatus::from_str(status)
            .map_err(|_| LedgerError::Validation(status.to_string()))?;

        self.registry.get(machine_id).await?;

        let model = StatusLogActive {
            machine_id: Set(machine_id),
            status: Set(status),
            timestamp: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(machine_id, %status, "appended status observation");

        Ok(model.to_observation())
    }

    /// The most recent observation for a machine, or `None` if nothing
    /// has been observed yet.
    pub async fn latest(&self, machine_id: i32) -> LedgerResult<Option<StatusObservation>> {
        self.registry.get(machine_id).await?;

        let row = Self::newest_first(machine_id).one(&self.db).await?;

        Ok(row.map(|r| r.to_observation()))
    }

    /// Up to `limit` most recent observations, newest first.
    ///
    /// An existing machine with no observations yields an empty list,
    /// not an error.
    pub async fn recent(&self, machine_id: i32, limit: u64) -> LedgerResult<Vec<StatusObservation>> {
        self.registry.get(machine_id).await?;

        let rows = Self::newest_first(machine_id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(rows.iter().map(|r| r.to_observation()).collect())
    }

    /// The complete observation series, oldest first - the ordering the
    /// time-series chart wants.
    pub async fn full_history(&self, machine_id: i32) -> LedgerResult<Vec<StatusObservation>> {
        self.registry.get(machine_id).await?;

        let rows = StatusLog::find()
            .filter(status_log::Column::MachineId.eq(machine_id))
            .order_by_asc(status_log::Column::Timestamp)
            .order_by_asc(status_log::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.iter().map(|r| r.to_observation()).collect())
    }

    fn newest_first(machine_id: i32) -> sea_orm::Select<StatusLog> {
        StatusLog::find()
            .filter(status_log::Column::MachineId.eq(machine_id))
            .order_by_desc(status_log::Column::Timestamp)
            .order_by_desc(status_log::Column::Id)
    }
}
