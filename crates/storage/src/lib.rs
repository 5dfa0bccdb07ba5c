//! Storage layer for taxi-fleet
//!
//! One contract, [`FleetStore`], with a volatile in-memory backend and a
//! durable SQLite backend. [`StorageBackend`] picks between them at runtime.

mod backend;
mod error;
mod memory;
mod migrations;
mod sqlite;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::FleetStore;
