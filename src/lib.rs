//! Client for a remote text analysis service.
//!
//! Submits text with an optional target tone and exposes the request
//! lifecycle (idle, pending, success, failed) as an explicit state machine.

pub mod analysis;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod session;
