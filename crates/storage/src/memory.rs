//! Volatile backend: an ordered in-process collection.
//!
//! State lives only as long as the [`MemoryStorage`] instance (and its clones).
//! Nothing is written to disk.

use std::sync::Arc;

use async_trait::async_trait;
use taxi_fleet_core::{FIRST_TAXI_ID, NewTaxi, Taxi, TaxiId, TaxiPatch};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::FleetStore;

#[derive(Debug)]
struct Fleet {
    taxis: Vec<Taxi>,
    next_id: TaxiId,
}

impl Default for Fleet {
    fn default() -> Self {
        Self { taxis: Vec::new(), next_id: FIRST_TAXI_ID }
    }
}

impl Fleet {
    fn position(&self, id: TaxiId) -> Option<usize> {
        self.taxis.iter().position(|taxi| taxi.id == id)
    }
}

/// In-memory fleet with its own identity counter.
///
/// Clones share the same fleet. Every operation holds the lock for its whole
/// duration, so each one applies fully or not at all.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    fleet: Arc<RwLock<Fleet>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FleetStore for MemoryStorage {
    async fn list_all(&self) -> Result<Vec<Taxi>, StorageError> {
        Ok(self.fleet.read().await.taxis.clone())
    }

    async fn list_by_status(&self, status: &str) -> Result<Vec<Taxi>, StorageError> {
        let fleet = self.fleet.read().await;
        Ok(fleet.taxis.iter().filter(|taxi| taxi.has_status(status)).cloned().collect())
    }

    async fn create(&self, input: NewTaxi) -> Result<Taxi, StorageError> {
        let fields = input.into_fields()?;
        let mut fleet = self.fleet.write().await;
        let taxi = Taxi::new(fleet.next_id, fields);
        fleet.next_id += 1;
        fleet.taxis.push(taxi.clone());
        tracing::debug!(id = taxi.id, number = %taxi.number, "taxi created in memory");
        Ok(taxi)
    }

    async fn update(&self, id: TaxiId, patch: TaxiPatch) -> Result<Taxi, StorageError> {
        patch.validate()?;
        let mut fleet = self.fleet.write().await;
        let slot = fleet
            .taxis
            .iter_mut()
            .find(|taxi| taxi.id == id)
            .ok_or(StorageError::NotFound(id))?;
        *slot = patch.apply(slot.clone());
        tracing::debug!(id, status = %slot.status, "taxi updated in memory");
        Ok(slot.clone())
    }

    async fn delete(&self, id: TaxiId) -> Result<(), StorageError> {
        let mut fleet = self.fleet.write().await;
        let index = fleet.position(id).ok_or(StorageError::NotFound(id))?;
        fleet.taxis.remove(index);
        tracing::debug!(id, "taxi deleted from memory");
        Ok(())
    }

    async fn reset(&self) -> Result<(), StorageError> {
        let mut fleet = self.fleet.write().await;
        *fleet = Fleet::default();
        tracing::debug!("in-memory fleet reset");
        Ok(())
    }
}
