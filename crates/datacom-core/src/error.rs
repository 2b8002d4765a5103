//! Error types for datacom-core

use thiserror::Error;

/// Result type alias for datacom-core
pub type Result<T> = std::result::Result<T, Error>;

/// Error type raised across the tool boundary
///
/// Domain failures a caller should see (unresolvable places, transport
/// errors) are reported inside the tool's outcome instead. These variants
/// cover what the outcome cannot express: bad input and missing tools.
#[derive(Error, Debug)]
pub enum Error {
    /// Tool parameters did not match the input schema
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Tool execution failed before an outcome could be produced
    #[error("Tool execution failed: {0}")]
    ToolFailed(String),

    /// No tool registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
