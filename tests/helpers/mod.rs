//! Shared test fixtures

#![allow(dead_code)]

use machinewatch::{Database, MachineRegistry, StatusLedger};
use tempfile::TempDir;

/// A migrated database in a private temp directory
pub struct TestStore {
    pub db: Database,
    // Held so the directory outlives the connection
    _dir: TempDir,
}

impl TestStore {
    pub fn registry(&self) -> MachineRegistry {
        MachineRegistry::new(self.db.conn().clone())
    }

    pub fn ledger(&self) -> StatusLedger {
        StatusLedger::new(self.db.conn().clone(), self.registry())
    }
}

pub async fn open_store() -> TestStore {
    let dir = TempDir::new().expect("failed to create temp dir");
    let db = Database::create(&dir.path().join("machinewatch.db"))
        .await
        .expect("failed to create database");
    db.migrate().await.expect("failed to run migrations");

    TestStore { db, _dir: dir }
}
