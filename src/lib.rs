//! machinewatch
//!
//! Tracks physical machines and an append-only, time-ordered log of their
//! operating status, exposing a JSON API and a server-rendered dashboard.
//!
//! Two components, layered:
//! - [`registry`]: machine identity and metadata
//! - [`ledger`]: the status observation log and the queries over it
//!
//! The HTTP layer and the SQLite store live under [`infrastructure`].

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod ledger;
pub mod registry;

pub use config::AppConfig;
pub use domain::{Machine, MachineDetail, MachineStatus, StatusObservation};
pub use infrastructure::database::Database;
pub use infrastructure::http::{build_router, AppState};
pub use ledger::{LedgerError, StatusLedger, DETAIL_HISTORY_LIMIT};
pub use registry::{MachineRegistry, RegistryError, MAX_PAGE_SIZE};
