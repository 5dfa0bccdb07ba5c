//! Unified storage backend with enum dispatch.

use std::path::Path;

use async_trait::async_trait;
use taxi_fleet_core::{NewTaxi, Taxi, TaxiId, TaxiPatch};

use crate::error::StorageError;
use crate::traits::FleetStore;
use crate::{MemoryStorage, SqliteStorage};

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <MemoryStorage as FleetStore>::$method(s, $($arg),*).await,
            StorageBackend::Sqlite(s) => <SqliteStorage as FleetStore>::$method(s, $($arg),*).await,
        }
    };
}

/// One of the two interchangeable fleet backends, chosen at startup.
#[derive(Clone, Debug)]
pub enum StorageBackend {
    /// Volatile: lost when the process exits.
    Memory(MemoryStorage),
    /// Durable: a SQLite database file.
    Sqlite(SqliteStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    pub async fn new_sqlite(db_path: &Path, pool_size: u32) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(SqliteStorage::open(db_path, pool_size).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

#[async_trait]
impl FleetStore for StorageBackend {
    async fn list_all(&self) -> Result<Vec<Taxi>, StorageError> {
        dispatch!(self, list_all())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Taxi>, StorageError> {
        dispatch!(self, list_by_status(status))
    }

    async fn create(&self, input: NewTaxi) -> Result<Taxi, StorageError> {
        dispatch!(self, create(input))
    }

    async fn update(&self, id: TaxiId, patch: TaxiPatch) -> Result<Taxi, StorageError> {
        dispatch!(self, update(id, patch))
    }

    async fn delete(&self, id: TaxiId) -> Result<(), StorageError> {
        dispatch!(self, delete(id))
    }

    async fn reset(&self) -> Result<(), StorageError> {
        dispatch!(self, reset())
    }
}
