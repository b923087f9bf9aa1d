use crate::analysis::{AnalysisError, AnalysisInput, AnalysisResult, ValidationError};
use crate::mvi::Intent;

/// Commands and events that drive the session state machine.
#[derive(Debug, Clone)]
pub enum SessionIntent {
    /// A validated request is about to be sent.
    Submit { request: AnalysisInput },

    /// The builder rejected the raw input; nothing is sent.
    Invalid { error: ValidationError },

    /// The request tagged with `generation` settled.
    Resolved {
        generation: u64,
        outcome: Result<AnalysisResult, AnalysisError>,
    },

    /// Discard everything and return to idle.
    Reset,
}

impl Intent for SessionIntent {}
