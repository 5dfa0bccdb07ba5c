//! Durable backend: a single SQLite table accessed through sqlx.

mod fleet;

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use taxi_fleet_core::Taxi;

use crate::error::StorageError;
use crate::migrations::run_migrations;

pub(crate) const TAXI_COLUMNS: &str = "id, number, driver, status";

#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (creating if missing) the database file at `db_path` and make sure
    /// the schema exists.
    pub async fn open(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new().filename(db_path).create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .connect_with(options)
            .await?;
        run_migrations(&pool).await.map_err(StorageError::Migration)?;
        tracing::info!(path = %db_path.display(), pool_size, "SqliteStorage initialized");
        Ok(Self { pool })
    }

    /// Close every pooled connection. Pending operations finish first.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub(crate) fn row_to_taxi(row: &SqliteRow) -> Result<Taxi, StorageError> {
    Ok(Taxi {
        id: row.try_get("id")?,
        number: row.try_get("number")?,
        driver: row.try_get("driver")?,
        status: row.try_get("status")?,
    })
}
