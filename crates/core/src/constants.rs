//! Shared constants for taxi-fleet.

use crate::TaxiId;

/// Driver assigned to a taxi created without one.
pub const DEFAULT_DRIVER: &str = "Unknown";

/// Status assigned to a taxi created without one.
pub const DEFAULT_STATUS: &str = "free";

/// Identity handed out by a fresh volatile backend, and again after a reset.
pub const FIRST_TAXI_ID: TaxiId = 1;

/// Default port for `taxi-fleet serve`.
pub const DEFAULT_PORT: u16 = 5000;

/// Durable backend connection pool: default maximum connections.
pub const DEFAULT_DB_POOL_SIZE: u32 = 5;

/// Environment variable overriding the durable database file location.
pub const DB_PATH_ENV: &str = "TAXI_FLEET_DB_PATH";

/// Environment variable overriding the durable backend pool size.
pub const DB_POOL_SIZE_ENV: &str = "TAXI_FLEET_DB_POOL_SIZE";
