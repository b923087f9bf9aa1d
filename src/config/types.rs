use serde::{Deserialize, Serialize};

use crate::analysis::DEFAULT_MAX_TEXT_LENGTH;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// Where the analysis service lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base; `/analyze` is appended (default: "http://127.0.0.1:8000/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Host-side timeout in seconds, 0 disables it (default: 0).
    #[serde(default)]
    pub timeout_seconds: u64,
}

/// Limits applied to user input before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum text length in characters (default: 10000).
    #[serde(default = "default_max_text_length")]
    pub max_text_length: usize,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000/api".to_string()
}

fn default_max_text_length() -> usize {
    DEFAULT_MAX_TEXT_LENGTH
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: 0,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_text_length: default_max_text_length(),
        }
    }
}
