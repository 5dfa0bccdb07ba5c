//! FleetStore implementation for SqliteStorage.
//!
//! Create and delete run in a transaction; returning early drops it, which rolls
//! back. Update is a single `UPDATE ... RETURNING` statement.

use async_trait::async_trait;
use taxi_fleet_core::{NewTaxi, Taxi, TaxiId, TaxiPatch};

use super::{SqliteStorage, TAXI_COLUMNS, row_to_taxi};
use crate::error::StorageError;
use crate::traits::FleetStore;

#[async_trait]
impl FleetStore for SqliteStorage {
    async fn list_all(&self) -> Result<Vec<Taxi>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {TAXI_COLUMNS} FROM taxi_fleet ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_taxi).collect()
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Taxi>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {TAXI_COLUMNS} FROM taxi_fleet WHERE status = ? ORDER BY id"
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_taxi).collect()
    }

    async fn create(&self, input: NewTaxi) -> Result<Taxi, StorageError> {
        let fields = input.into_fields()?;
        let mut tx = self.pool.begin().await?;
        let result =
            sqlx::query("INSERT INTO taxi_fleet (number, driver, status) VALUES (?, ?, ?)")
                .bind(&fields.number)
                .bind(&fields.driver)
                .bind(&fields.status)
                .execute(&mut *tx)
                .await?;
        let id = result.last_insert_rowid();
        tx.commit().await?;
        tracing::debug!(id, number = %fields.number, "taxi inserted");
        Ok(Taxi::new(id, fields))
    }

    async fn update(&self, id: TaxiId, patch: TaxiPatch) -> Result<Taxi, StorageError> {
        patch.validate()?;
        // One statement takes the write lock up front; a NULL bind keeps the stored value.
        let row = sqlx::query(&format!(
            "UPDATE taxi_fleet SET number = COALESCE(?, number), driver = COALESCE(?, driver), \
             status = COALESCE(?, status) WHERE id = ? RETURNING {TAXI_COLUMNS}"
        ))
        .bind(patch.number)
        .bind(patch.driver)
        .bind(patch.status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        let updated = match row {
            Some(row) => row_to_taxi(&row)?,
            None => return Err(StorageError::NotFound(id)),
        };
        tracing::debug!(id, status = %updated.status, "taxi updated");
        Ok(updated)
    }

    async fn delete(&self, id: TaxiId) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM taxi_fleet WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(id));
        }
        tx.commit().await?;
        tracing::debug!(id, "taxi deleted");
        Ok(())
    }

    async fn reset(&self) -> Result<(), StorageError> {
        let result = sqlx::query("DELETE FROM taxi_fleet").execute(&self.pool).await?;
        tracing::debug!(removed = result.rows_affected(), "taxi fleet reset");
        Ok(())
    }
}
