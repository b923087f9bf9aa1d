//! Lifecycle state of an analysis session.

use serde::Serialize;

use crate::analysis::{AnalysisError, AnalysisInput, AnalysisResult};
use crate::mvi::UiState;

/// Exactly one of these holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Nothing submitted, or the session was reset.
    #[default]
    Idle,

    /// A request is in flight.
    Pending {
        /// The validated input that was sent.
        request: AnalysisInput,
    },

    /// The last request succeeded.
    Success { result: AnalysisResult },

    /// Validation, transport, or the service failed.
    Failed { error: AnalysisError },
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            Self::Success { result } => Some(result),
            _ => None,
        }
    }

    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Pending { .. } => "pending",
            Self::Success { .. } => "success",
            Self::Failed { .. } => "failed",
        }
    }

    /// Read-only projection handed to presentation layers.
    pub fn view(&self) -> SessionView {
        SessionView {
            loading: self.is_pending(),
            error: self.error().map(AnalysisError::message),
            result: self.result().cloned(),
        }
    }
}

/// State plus the generation of the request it belongs to.
///
/// The generation is bumped on every accepted submission and every reset;
/// a resolution carrying any other generation is stale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionModel {
    pub state: SessionState,
    pub generation: u64,
}

impl UiState for SessionModel {}

/// What a renderer needs: `{loading, error, result}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SessionView {
    pub loading: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}
