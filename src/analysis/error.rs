//! Error taxonomy for a single analysis attempt.
//!
//! Every variant renders (via `Display`) to the message shown to the user;
//! `kind()` keeps the origin available for logging.

use thiserror::Error;

use super::request::ValidationError;

/// Why an analysis attempt ended in the `Failed` state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Input rejected locally; no request was sent.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No response was received.
    #[error("{message}")]
    Transport { message: String },

    /// The service answered with a non-success status.
    #[error("{message}")]
    Service { status: u16, message: String },

    /// A success response whose body could not be read as a result.
    #[error("{message}")]
    Decode { message: String },
}

impl AnalysisError {
    /// User-facing message.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Short identifier for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Validation(_) => "validation_error",
            AnalysisError::Transport { .. } => "transport_error",
            AnalysisError::Service { .. } => "service_error",
            AnalysisError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status reported by the service, if it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AnalysisError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        AnalysisError::Transport {
            message: err.to_string(),
        }
    }
}
