//! Machine registry integration tests

mod helpers;

use helpers::open_store;
use machinewatch::RegistryError;

#[tokio::test]
async fn create_assigns_unique_ids_and_metadata() {
    let store = open_store().await;
    let registry = store.registry();

    let first = registry.create("Press A", "Line 1").await.unwrap();
    assert_eq!(first.name, "Press A");
    assert_eq!(first.location, "Line 1");

    let mut seen = vec![first.id];
    for n in 0..5 {
        let machine = registry
            .create(&format!("Press {n}"), "Line 1")
            .await
            .unwrap();
        assert!(!seen.contains(&machine.id), "id {} reused", machine.id);
        seen.push(machine.id);
    }
}

#[tokio::test]
async fn create_allows_duplicate_name_and_location() {
    let store = open_store().await;
    let registry = store.registry();

    let a = registry.create("Press A", "Line 1").await.unwrap();
    let b = registry.create("Press A", "Line 1").await.unwrap();
    assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn create_rejects_empty_fields() {
    let store = open_store().await;
    let registry = store.registry();

    for (name, location) in [("", "Line 1"), ("Press A", ""), ("   ", "Line 1")] {
        let err = registry.create(name, location).await.unwrap_err();
        assert!(
            matches!(err, RegistryError::Validation(_)),
            "expected validation error for ({name:?}, {location:?}), got {err:?}"
        );
    }

    // Nothing was persisted by the rejected requests
    assert!(registry.list(0, 10).await.unwrap().is_empty());
}

#[tokio::test]
async fn get_unknown_machine_fails() {
    let store = open_store().await;
    let registry = store.registry();

    let err = registry.get(999).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(999)));
}

#[tokio::test]
async fn list_pages_in_id_order() {
    let store = open_store().await;
    let registry = store.registry();

    for n in 1..=4 {
        registry
            .create(&format!("Press {n}"), "Line 1")
            .await
            .unwrap();
    }

    let all = registry.list(0, 100).await.unwrap();
    assert_eq!(all.len(), 4);
    let ids: Vec<_> = all.iter().map(|m| m.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    let page = registry.list(1, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].id, all[1].id);
    assert_eq!(page[1].id, all[2].id);

    // Offset past the end is an empty page, not an error
    assert!(registry.list(10, 2).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_cascades_to_observations() {
    use machinewatch::infrastructure::database::entities::{status_log, StatusLog};
    use machinewatch::LedgerError;
    use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

    let store = open_store().await;
    let registry = store.registry();
    let ledger = store.ledger();

    let machine = registry.create("Press A", "Line 1").await.unwrap();
    ledger.append(machine.id, "running").await.unwrap();
    ledger.append(machine.id, "error").await.unwrap();

    registry.delete(machine.id).await.unwrap();

    let err = registry.get(machine.id).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));

    let err = ledger.latest(machine.id).await.unwrap_err();
    assert!(matches!(err, LedgerError::MachineNotFound(_)));
    let err = ledger.recent(machine.id, 5).await.unwrap_err();
    assert!(matches!(err, LedgerError::MachineNotFound(_)));

    // The cascade removed the log rows themselves
    let rows = StatusLog::find()
        .filter(status_log::Column::MachineId.eq(machine.id))
        .all(store.db.conn())
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn delete_unknown_machine_fails() {
    let store = open_store().await;
    let registry = store.registry();

    let err = registry.delete(42).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(42)));
}
