//! Transition table for the analysis session.

use crate::mvi::Reducer;

use super::intent::SessionIntent;
use super::state::{SessionModel, SessionState};

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionModel;
    type Intent = SessionIntent;

    fn reduce(model: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Only one request may be in flight.
            SessionIntent::Submit { .. } | SessionIntent::Invalid { .. }
                if model.state.is_pending() =>
            {
                model
            }

            SessionIntent::Submit { request } => SessionModel {
                state: SessionState::Pending { request },
                generation: model.generation.wrapping_add(1),
            },

            SessionIntent::Invalid { error } => SessionModel {
                state: SessionState::Failed {
                    error: error.into(),
                },
                generation: model.generation,
            },

            SessionIntent::Resolved {
                generation,
                outcome,
            } => {
                if generation != model.generation || !model.state.is_pending() {
                    return model;
                }
                let state = match outcome {
                    Ok(result) => SessionState::Success { result },
                    Err(error) => SessionState::Failed { error },
                };
                SessionModel {
                    state,
                    generation: model.generation,
                }
            }

            SessionIntent::Reset => SessionModel {
                state: SessionState::Idle,
                generation: model.generation.wrapping_add(1),
            },
        }
    }
}
