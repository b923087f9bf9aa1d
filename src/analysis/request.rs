//! Validation and shaping of outgoing analysis requests.

use serde::Serialize;
use thiserror::Error;

use super::tone::ToneId;

/// Default upper bound on submitted text, in characters.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Reasons a raw input cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to analyze")]
    EmptyText,

    #[error("Text is too long: {length} characters (maximum is {max})")]
    TooLong { length: usize, max: usize },
}

/// A validated analysis request, serialized as the POST body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisInput {
    pub text: String,
    pub target_tone: Option<ToneId>,
}

/// Builds [`AnalysisInput`] values, enforcing the configured length bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestBuilder {
    max_text_length: usize,
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_LENGTH)
    }
}

impl RequestBuilder {
    pub fn new(max_text_length: usize) -> Self {
        Self { max_text_length }
    }

    pub fn max_text_length(&self) -> usize {
        self.max_text_length
    }

    /// Validate raw input.
    ///
    /// The text is kept exactly as given; trimming only decides emptiness.
    pub fn build(
        &self,
        raw_text: &str,
        tone: Option<ToneId>,
    ) -> Result<AnalysisInput, ValidationError> {
        if raw_text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let length = char_count(raw_text);
        if length > self.max_text_length {
            return Err(ValidationError::TooLong {
                length,
                max: self.max_text_length,
            });
        }

        Ok(AnalysisInput {
            text: raw_text.to_string(),
            target_tone: tone,
        })
    }

    /// True once the text uses more than 90% of the allowed length.
    pub fn is_near_limit(&self, text: &str) -> bool {
        char_count(text).saturating_mul(10) > self.max_text_length.saturating_mul(9)
    }
}

/// Length of `text` as counted against the maximum.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
