//! Sea-ORM entity definitions
//!
//! These map the domain models to database tables.

pub mod machine;
pub mod status_log;

// Re-export all entities
pub use machine::Entity as Machine;
pub use status_log::Entity as StatusLog;

// Re-export active models for easy access
pub use machine::ActiveModel as MachineActive;
pub use status_log::ActiveModel as StatusLogActive;
