//! Test utilities and module declarations for storage tests.

use crate::SqliteStorage;
use tempfile::TempDir;

#[expect(clippy::unwrap_used, reason = "test code")]
pub async fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::open(&db_path, 1).await.unwrap();
    (storage, temp_dir)
}

mod sqlite_tests;
