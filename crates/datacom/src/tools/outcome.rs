//! Uniform result returned by every tool

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// What the calling agent receives
///
/// Serializes as `{"status": "success", "report", "data"}` or
/// `{"status": "error", "error_message"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome {
    Success { report: String, data: Value },
    Error { error_message: String },
}

impl ToolOutcome {
    pub fn success(report: impl Into<String>, data: Value) -> Self {
        Self::Success {
            report: report.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            Self::Success { report, data } => json!({
                "status": "success",
                "report": report,
                "data": data,
            }),
            Self::Error { error_message } => json!({
                "status": "error",
                "error_message": error_message,
            }),
        }
    }
}
