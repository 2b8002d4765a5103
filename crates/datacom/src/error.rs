//! Error types for Data Commons operations

use thiserror::Error;

/// Data Commons specific errors
#[derive(Debug, Error)]
pub enum DataCommonsError {
    /// Name resolution returned no candidate identifier
    #[error("Could not find place data for '{0}'")]
    PlaceNotFound(String),

    /// Transport failure (connection refused, timeout, TLS, ...)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-2xx status
    #[error("API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request URL could not be assembled
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Date selector is neither LATEST nor a YYYY[-MM[-DD]] date
    #[error("Invalid date selector '{0}': expected LATEST, YYYY, YYYY-MM or YYYY-MM-DD")]
    InvalidDate(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Data Commons operations
pub type Result<T> = std::result::Result<T, DataCommonsError>;

/// Convert DataCommonsError to datacom_core::Error
impl From<DataCommonsError> for datacom_core::Error {
    fn from(err: DataCommonsError) -> Self {
        match err {
            DataCommonsError::InvalidDate(_) => {
                datacom_core::Error::InvalidParameters(err.to_string())
            }
            other => datacom_core::Error::ToolFailed(other.to_string()),
        }
    }
}
