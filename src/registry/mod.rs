//! Machine registry - owns machine identity and metadata.
//!
//! The registry is the leaf component: it knows nothing about status
//! observations beyond the fact that deleting a machine takes its log
//! rows with it (enforced by the store's cascade).

mod error;

pub use error::{RegistryError, RegistryResult};

use crate::domain::Machine;
use crate::infrastructure::database::entities::{machine, Machine as MachineEntity, MachineActive};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::{debug, instrument};

/// Largest page a single list call will return
pub const MAX_PAGE_SIZE: u64 = 100;

/// Create and retrieve machine metadata.
#[derive(Clone)]
pub struct MachineRegistry {
    db: DatabaseConnection,
}

impl MachineRegistry {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Register a new machine.
    ///
    /// Name and location must be non-empty after trimming; no duplicate
    /// detection, several machines may share both.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, location: &str) -> RegistryResult<Machine> {
        let name = name.trim();
        let location = location.trim();

        if name.is_empty() {
            return Err(RegistryError::Validation("name must not be empty".into()));
        }
        if location.is_empty() {
            return Err(RegistryError::Validation(
                "location must not be empty".into(),
            ));
        }

        let model = MachineActive {
            name: Set(name.to_string()),
            location: Set(location.to_string()),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!(machine_id = model.id, name, "registered machine");

        Ok(model.to_machine())
    }

    /// Fetch a machine by id
    pub async fn get(&self, id: i32) -> RegistryResult<Machine> {
        MachineEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(|m| m.to_machine())
            .ok_or(RegistryError::NotFound(id))
    }

    /// List machines in id order.
    ///
    /// `limit` is capped at [`MAX_PAGE_SIZE`]; an offset past the end
    /// yields an empty page, never an error.
    pub async fn list(&self, offset: u64, limit: u64) -> RegistryResult<Vec<Machine>> {
        let machines = MachineEntity::find()
            .order_by_asc(machine::Column::Id)
            .offset(offset)
            .limit(limit.min(MAX_PAGE_SIZE))
            .all(&self.db)
            .await?;

        Ok(machines.iter().map(|m| m.to_machine()).collect())
    }

    /// Delete a machine and, via cascade, all of its status observations
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> RegistryResult<()> {
        let result = MachineEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(RegistryError::NotFound(id));
        }

        debug!(machine_id = id, "deleted machine");
        Ok(())
    }
}
