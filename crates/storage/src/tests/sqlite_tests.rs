use taxi_fleet_core::{NewTaxi, TaxiPatch};
use tempfile::TempDir;

use super::create_test_storage;
use crate::{FleetStore, SqliteStorage, StorageBackend, StorageError};

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn reset_keeps_identity_sequence() {
    let (storage, _temp_dir) = create_test_storage().await;
    storage.create(NewTaxi::new("A1")).await.unwrap();
    let last = storage.create(NewTaxi::new("B2")).await.unwrap();

    storage.reset().await.unwrap();
    assert!(storage.list_all().await.unwrap().is_empty());

    let taxi = storage.create(NewTaxi::new("C3")).await.unwrap();
    assert!(taxi.id > last.id, "id {} issued again after reset", taxi.id);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn state_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("fleet.db");

    let storage = SqliteStorage::open(&db_path, 1).await.unwrap();
    let kept = storage.create(NewTaxi::new("A1").driver("Ivan")).await.unwrap();
    let updated = storage.update(kept.id, TaxiPatch::default().status("busy")).await.unwrap();
    let dropped = storage.create(NewTaxi::new("B2")).await.unwrap();
    storage.delete(dropped.id).await.unwrap();
    storage.close().await;
    drop(storage);

    let reopened = SqliteStorage::open(&db_path, 1).await.unwrap();
    assert_eq!(reopened.list_all().await.unwrap(), vec![updated]);

    let next = reopened.create(NewTaxi::new("C3")).await.unwrap();
    assert!(next.id > dropped.id);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn reopen_after_reset_keeps_sequence() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("fleet.db");

    let storage = StorageBackend::new_sqlite(&db_path, 2).await.unwrap();
    let last = storage.create(NewTaxi::new("A1")).await.unwrap();
    storage.reset().await.unwrap();
    drop(storage);

    let reopened = StorageBackend::new_sqlite(&db_path, 2).await.unwrap();
    assert_eq!(reopened.kind(), "sqlite");
    assert!(reopened.list_all().await.unwrap().is_empty());
    assert!(reopened.create(NewTaxi::new("B2")).await.unwrap().id > last.id);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn schema_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("fleet.db");

    let first = SqliteStorage::open(&db_path, 1).await.unwrap();
    first.create(NewTaxi::new("A1")).await.unwrap();
    let second = SqliteStorage::open(&db_path, 1).await.unwrap();

    assert_eq!(second.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn update_returns_what_was_stored() {
    let (storage, _temp_dir) = create_test_storage().await;
    let taxi = storage.create(NewTaxi::new("A1")).await.unwrap();

    let updated = storage
        .update(taxi.id, TaxiPatch::default().number("A2").driver("Olga"))
        .await
        .unwrap();

    assert_eq!(storage.list_all().await.unwrap(), vec![updated.clone()]);
    assert_eq!(updated.status, "free");
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn concurrent_updates_all_succeed() {
    let temp_dir = TempDir::new().unwrap();
    let storage = SqliteStorage::open(&temp_dir.path().join("fleet.db"), 5).await.unwrap();
    let id = storage.create(NewTaxi::new("A1")).await.unwrap().id;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let storage = storage.clone();
            tokio::spawn(async move {
                storage.update(id, TaxiPatch::default().driver(format!("driver-{i}"))).await
            })
        })
        .collect();
    for handle in handles {
        let updated = handle.await.unwrap().unwrap();
        assert_eq!(updated.number, "A1");
    }
    assert_eq!(storage.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn migration_failure_keeps_cause() {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("fleet.db");
    let pool = SqlitePoolOptions::new()
        .connect_with(SqliteConnectOptions::new().filename(&db_path).create_if_missing(true))
        .await
        .unwrap();
    // A view under the table name slips past CREATE TABLE IF NOT EXISTS but cannot be indexed.
    sqlx::query("CREATE VIEW taxi_fleet AS SELECT 1 AS status").execute(&pool).await.unwrap();
    pool.close().await;

    let err = SqliteStorage::open(&db_path, 1).await.unwrap_err();
    assert!(matches!(err, StorageError::Migration(_)), "unexpected error: {err}");
    assert!(std::error::Error::source(&err).is_some());
}
