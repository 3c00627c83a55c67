//! Error types for classtrack

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the lifecycle, gateway and auth layers
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed input, e.g. an empty or unparseable submission link
    #[error("validation failed: {0}")]
    Validation(String),

    /// The group is not in the assignment's audience
    #[error("not eligible: {0}")]
    Eligibility(String),

    /// A submission already exists for this (assignment, group) pair
    #[error("duplicate submission: {0}")]
    Duplicate(String),

    /// A transition was attempted from a state that does not permit it
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A referenced entity does not exist
    #[error("not found: {0}")]
    NotFound(String),

    /// Authentication is missing or was rejected by the backend
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The backend rejected the request with an error message
    #[error("backend error: {0}")]
    Api(String),

    /// Network or protocol failure talking to the backend
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a response the client could not make sense of
    #[error("malformed response: {0}")]
    Decode(String),

    /// Local I/O failure (session store)
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
