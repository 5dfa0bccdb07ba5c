//! Typed error enum for the storage layer.
//!
//! Every backend reports failures through [`StorageError`], so callers can
//! tell a rejected input or a missing taxi apart from a broken database.

use taxi_fleet_core::{TaxiId, ValidationError};
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Input failed the required-field check.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No taxi with this identity.
    #[error("taxi {0} not found")]
    NotFound(TaxiId),

    /// SQL / connection / I/O failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be decoded into a taxi record.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema initialization failure.
    #[error("migration error: {0}")]
    Migration(#[source] sqlx::Error),
}

impl StorageError {
    /// Whether the operation targeted an identity that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether the caller's input was rejected.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Custom `From<sqlx::Error>` rather than a blanket `#[from]`.
///
/// - Column decode failures → `DataCorruption`
/// - Everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(
            err,
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) | sqlx::Error::Decode(_)
        ) {
            return Self::DataCorruption {
                context: "taxi_fleet row".to_owned(),
                source: Box::new(err),
            };
        }
        Self::Database(err)
    }
}
