//! Core types for taxi-fleet
//!
//! Domain types shared by the storage backends, the HTTP adapter and the CLI.

mod constants;
mod env_config;
mod error;
mod taxi;

pub use constants::*;
pub use env_config::env_parse_with_default;
pub use error::ValidationError;
pub use taxi::*;
