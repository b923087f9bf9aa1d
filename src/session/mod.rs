//! Analysis session state machine.
//!
//! Idle → Pending → Success | Failed, with `reset` returning to Idle from
//! anywhere.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state, generation, and the render projection
//! - `intent.rs` - Submit / invalid input / resolution / reset
//! - `reducer.rs` - Pure transitions, including stale-response suppression
//! - `lifecycle.rs` - Async driver that owns the state and calls the backend

mod intent;
mod lifecycle;
mod reducer;
mod state;

pub use intent::SessionIntent;
pub use lifecycle::{AnalysisSession, Submission};
pub use reducer::SessionReducer;
pub use state::{SessionModel, SessionState, SessionView};
