// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Message carried by [`CityDbError::SearchFailure`].
///
/// Consumers match on this exact text, so it must not change.
pub const SEARCH_FAILURE_MESSAGE: &str = "Something terrible just happened!";

/// Unified error type for the whole crate.
#[derive(Debug, Error)]
pub enum CityDbError {
    /// The search term folded to `"error"`. Raised before any record is scanned.
    #[error("Something terrible just happened!")]
    SearchFailure,

    #[error("not found: {0}")]
    NotFound(String),

    /// The dataset could not be turned into a valid store. Fatal at startup.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

impl CityDbError {
    /// `true` for the deliberate search fault, which callers render inline
    /// instead of treating as a crash.
    pub fn is_search_failure(&self) -> bool {
        matches!(self, CityDbError::SearchFailure)
    }
}

pub type Result<T> = std::result::Result<T, CityDbError>;
