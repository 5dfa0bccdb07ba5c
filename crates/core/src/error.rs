use thiserror::Error;

/// Input rejected before it reaches a backend.
///
/// Raised for a missing or empty required field. Nothing else about a taxi
/// record is validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}
