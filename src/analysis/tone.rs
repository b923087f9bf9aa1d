//! Closed catalogue of tones the analysis service understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Target tone for a text transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ToneId {
    Formal,
    Informal,
    Friendly,
    Professional,
    Casual,
    Complaint,
    Persuasive,
    Academic,
}

/// Returned when a string does not name one of the known tones.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown tone '{0}'")]
pub struct ToneParseError(pub String);

impl ToneId {
    /// Every tone, in catalogue order.
    pub const ALL: [ToneId; 8] = [
        ToneId::Formal,
        ToneId::Informal,
        ToneId::Friendly,
        ToneId::Professional,
        ToneId::Casual,
        ToneId::Complaint,
        ToneId::Persuasive,
        ToneId::Academic,
    ];

    /// Wire identifier sent as `target_tone`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ToneId::Formal => "formal",
            ToneId::Informal => "informal",
            ToneId::Friendly => "friendly",
            ToneId::Professional => "professional",
            ToneId::Casual => "casual",
            ToneId::Complaint => "complaint",
            ToneId::Persuasive => "persuasive",
            ToneId::Academic => "academic",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ToneId::Formal => "Formal",
            ToneId::Informal => "Informal",
            ToneId::Friendly => "Friendly",
            ToneId::Professional => "Professional",
            ToneId::Casual => "Casual",
            ToneId::Complaint => "Complaint",
            ToneId::Persuasive => "Persuasive",
            ToneId::Academic => "Academic",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToneId::Formal => "Professional and structured",
            ToneId::Informal => "Casual and conversational",
            ToneId::Friendly => "Warm and approachable",
            ToneId::Professional => "Business-appropriate",
            ToneId::Casual => "Relaxed and everyday",
            ToneId::Complaint => "Formal dissatisfaction",
            ToneId::Persuasive => "Convincing and influential",
            ToneId::Academic => "Scholarly and research-oriented",
        }
    }
}

impl fmt::Display for ToneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneId {
    type Err = ToneParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ToneId::ALL
            .iter()
            .copied()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ToneParseError(s.to_string()))
    }
}
