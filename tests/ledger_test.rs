//! Status ledger integration tests

mod helpers;

use helpers::open_store;
use machinewatch::{LedgerError, MachineStatus};

#[tokio::test]
async fn append_records_an_observation() {
    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();
    let obs = ledger.append(machine.id, "running").await.unwrap();

    assert_eq!(obs.machine_id, machine.id);
    assert_eq!(obs.status, MachineStatus::Running);
}

#[tokio::test]
async fn append_to_unknown_machine_writes_nothing() {
    use machinewatch::infrastructure::database::entities::StatusLog;
    use sea_orm::EntityTrait;

    let store = open_store().await;
    let ledger = store.ledger();

    let err = ledger.append(999, "running").await.unwrap_err();
    assert!(matches!(err, LedgerError::MachineNotFound(999)));

    let rows = StatusLog::find().all(store.db.conn()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn append_rejects_unknown_status() {
    use machinewatch::infrastructure::database::entities::StatusLog;
    use sea_orm::EntityTrait;

    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();
    for status in ["exploded", "", "RUNNING "] {
        let err = ledger.append(machine.id, status).await.unwrap_err();
        assert!(
            matches!(err, LedgerError::Validation(_)),
            "expected validation error for {status:?}, got {err:?}"
        );
    }

    let rows = StatusLog::find().all(store.db.conn()).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn machine_without_observations_has_no_status() {
    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();

    assert!(ledger.latest(machine.id).await.unwrap().is_none());
    assert!(ledger.recent(machine.id, 5).await.unwrap().is_empty());
    assert!(ledger.full_history(machine.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn queries_on_unknown_machine_fail() {
    let store = open_store().await;
    let ledger = store.ledger();

    assert!(matches!(
        ledger.latest(999).await.unwrap_err(),
        LedgerError::MachineNotFound(999)
    ));
    assert!(matches!(
        ledger.recent(999, 5).await.unwrap_err(),
        LedgerError::MachineNotFound(999)
    ));
    assert!(matches!(
        ledger.full_history(999).await.unwrap_err(),
        LedgerError::MachineNotFound(999)
    ));
}

#[tokio::test]
async fn latest_and_recent_follow_append_order() {
    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();
    let s1 = ledger.append(machine.id, "running").await.unwrap();
    let s2 = ledger.append(machine.id, "error").await.unwrap();

    let latest = ledger.latest(machine.id).await.unwrap().unwrap();
    assert_eq!(latest.id, s2.id);
    assert_eq!(latest.status, MachineStatus::Error);

    let recent = ledger.recent(machine.id, 5).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![s2.id, s1.id]);
}

#[tokio::test]
async fn recent_bounds_the_window_and_never_reorders() {
    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();
    let statuses = ["idle", "running", "error", "maintenance", "running", "idle", "running"];
    for status in statuses {
        ledger.append(machine.id, status).await.unwrap();
    }

    let recent = ledger.recent(machine.id, 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    for window in recent.windows(2) {
        assert!(
            window[0].timestamp >= window[1].timestamp,
            "recent history must be newest first"
        );
    }

    assert_eq!(ledger.recent(machine.id, 1).await.unwrap().len(), 1);
}

#[tokio::test]
async fn full_history_is_the_oldest_first_mirror() {
    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();
    for status in ["idle", "running", "error"] {
        ledger.append(machine.id, status).await.unwrap();
    }

    let full = ledger.full_history(machine.id).await.unwrap();
    let mut newest_first = ledger.recent(machine.id, 100).await.unwrap();
    newest_first.reverse();

    assert_eq!(full, newest_first);
    assert_eq!(full[0].status, MachineStatus::Idle);
    assert_eq!(full[2].status, MachineStatus::Error);
}

#[tokio::test]
async fn equal_timestamps_tie_break_by_insertion_order() {
    use machinewatch::infrastructure::database::entities::StatusLogActive;
    use sea_orm::{ActiveModelTrait, Set};

    let store = open_store().await;
    let ledger = store.ledger();

    let machine = store.registry().create("Press A", "Line 1").await.unwrap();

    // Force a clock-granularity collision by inserting rows directly
    let collision = chrono::Utc::now();
    for status in [MachineStatus::Idle, MachineStatus::Running] {
        StatusLogActive {
            machine_id: Set(machine.id),
            status: Set(status),
            timestamp: Set(collision),
            ..Default::default()
        }
        .insert(store.db.conn())
        .await
        .unwrap();
    }

    // The most recently appended observation wins
    let latest = ledger.latest(machine.id).await.unwrap().unwrap();
    assert_eq!(latest.status, MachineStatus::Running);

    let recent = ledger.recent(machine.id, 5).await.unwrap();
    assert_eq!(recent[0].status, MachineStatus::Running);
    assert_eq!(recent[1].status, MachineStatus::Idle);
}
