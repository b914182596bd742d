//! Error types for the search crate.
//!
//! A query that matches nothing is not an error: the scorer reports it as
//! [`crate::NO_MATCH`] and the searcher leaves the item out of the results.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised by the surfaces around the matcher.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Property weight that is zero, negative or not finite
    #[error("Invalid property weight: {0} (must be a positive finite number)")]
    InvalidWeight(f64),

    /// Search options that cannot be applied
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Background search task panicked or was aborted
    #[error("Search task failed: {0}")]
    TaskFailed(String),
}

/// Error code for programmatic handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Invalid property weight
    InvalidWeight = 11001,
    /// Invalid search options
    InvalidOptions = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
    /// Background task failure
    TaskFailed = 11004,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidWeight(_) => SearchErrorCode::InvalidWeight,
            SearchError::InvalidOptions(_) => SearchErrorCode::InvalidOptions,
            SearchError::Json(_) => SearchErrorCode::JsonParsing,
            SearchError::TaskFailed(_) => SearchErrorCode::TaskFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SearchError::InvalidWeight(0.0).code() as u32, 11001);
        assert_eq!(SearchError::TaskFailed("boom".into()).code(), SearchErrorCode::TaskFailed);
    }

    #[test]
    fn test_json_error_conversion() {
        let err: SearchError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert_eq!(err.code(), SearchErrorCode::JsonParsing);
        assert!(err.to_string().starts_with("JSON parsing error"));
    }
}
