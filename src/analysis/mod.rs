//! Request shaping, transport, and result types for text analysis.
//!
//! - `tone.rs` - Closed set of target tones
//! - `request.rs` - Input validation (the request builder)
//! - `result.rs` - Tolerant success payload
//! - `error.rs` - Failure taxonomy
//! - `client.rs` - HTTP client and the backend trait

mod client;
mod error;
mod request;
mod result;
mod tone;

pub use client::{AnalysisBackend, AnalysisClient, ANALYZE_PATH};
pub use error::AnalysisError;
pub use request::{
    char_count, AnalysisInput, RequestBuilder, ValidationError, DEFAULT_MAX_TEXT_LENGTH,
};
pub use result::AnalysisResult;
pub use tone::{ToneId, ToneParseError};
