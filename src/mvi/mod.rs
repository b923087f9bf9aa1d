//! Model-View-Intent (MVI) primitives for the analysis lifecycle.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: snapshot of everything a presentation layer renders
//! - **Intent**: user commands and network resolutions
//! - **Reducer**: pure `(State, Intent) -> State` transition function

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
