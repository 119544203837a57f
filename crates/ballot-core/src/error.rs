// crates/ballot-core/src/error.rs
use thiserror::Error;

/// Errors raised while loading or persisting ballot data.
///
/// Searching and suggestion filtering never fail; only the physical layer
/// (files, decoding) and the load ordering of a [`crate::BallotSession`]
/// produce errors.
#[derive(Debug, Error)]
pub enum BallotError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary store error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Ballot records were offered before the lookup table was installed.
    #[error("ballot data cannot be loaded before the zip lookup table")]
    LoadOrder,
}

pub type Result<T> = std::result::Result<T, BallotError>;
