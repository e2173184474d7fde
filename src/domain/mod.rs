//! Domain models shared by the registry, the ledger, and the HTTP layer.

pub mod machine;

pub use machine::{Machine, MachineDetail, MachineStatus, StatusObservation};
