//! Fleet store contract.
//!
//! Every backend implements [`FleetStore`]; the HTTP adapter and the CLI only
//! ever talk to this trait (usually through
//! [`StorageBackend`](crate::StorageBackend)).

use async_trait::async_trait;
use taxi_fleet_core::{NewTaxi, Taxi, TaxiId, TaxiPatch};

use crate::error::StorageError;

/// CRUD operations over one fleet of taxis.
#[async_trait]
pub trait FleetStore: Send + Sync {
    /// All taxis. The volatile backend keeps insertion order; the durable one
    /// returns ascending identity.
    async fn list_all(&self) -> Result<Vec<Taxi>, StorageError>;

    /// Taxis whose status exactly equals `status` (case-sensitive).
    async fn list_by_status(&self, status: &str) -> Result<Vec<Taxi>, StorageError>;

    /// Create a taxi, applying driver/status defaults and assigning a fresh identity.
    ///
    /// Fails with [`StorageError::Validation`] when `number` is absent or empty.
    async fn create(&self, input: NewTaxi) -> Result<Taxi, StorageError>;

    /// Overwrite the fields present in `patch`. An empty patch is a no-op.
    ///
    /// Fails with [`StorageError::NotFound`] for an unknown `id`.
    async fn update(&self, id: TaxiId, patch: TaxiPatch) -> Result<Taxi, StorageError>;

    /// Remove one taxi.
    ///
    /// Fails with [`StorageError::NotFound`] for an unknown `id`.
    async fn delete(&self, id: TaxiId) -> Result<(), StorageError>;

    /// Remove every taxi.
    async fn reset(&self) -> Result<(), StorageError>;
}
