//! Machine and status observation models.
//!
//! A Machine is a physical unit being monitored. Its operating state is
//! tracked as an append-only series of immutable status observations;
//! "current status" is always derived from the newest observation, never
//! stored alongside the machine where it could go stale.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Operating state reported for a machine.
///
/// Stored in the database as its lowercase string form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MachineStatus {
    #[sea_orm(string_value = "idle")]
    Idle,
    #[sea_orm(string_value = "running")]
    Running,
    #[sea_orm(string_value = "error")]
    Error,
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
}

/// A monitored machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Store-assigned identifier, immutable and never reused
    pub id: i32,
    pub name: String,
    pub location: String,
    /// Set once at creation, server clock
    pub created_at: DateTime<Utc>,
}

/// One immutable, timestamped record of a machine's operating state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusObservation {
    pub id: i32,
    pub machine_id: i32,
    pub status: MachineStatus,
    pub timestamp: DateTime<Utc>,
}

/// Detail view for a single machine: metadata plus the derived current
/// status and a bounded recent-history window, newest first.
///
/// Computed on read; not a stored entity.
#[derive(Debug, Clone, Serialize)]
pub struct MachineDetail {
    #[serde(flatten)]
    pub machine: Machine,
    pub current_status: Option<StatusObservation>,
    pub status_history: Vec<StatusObservation>,
}

impl MachineDetail {
    /// Compose the detail view from a machine and its recent history
    /// (newest first). The current status is the head of the history,
    /// so the two can never disagree.
    pub fn new(machine: Machine, status_history: Vec<StatusObservation>) -> Self {
        Self {
            machine,
            current_status: status_history.first().cloned(),
            status_history,
        }
    }
}
