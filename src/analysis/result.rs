//! Analysis payload returned by the service.

use serde::{Deserialize, Deserializer, Serialize};

/// Successful analysis of a submitted text.
///
/// Missing or `null` fields fall back to their empty form so a partially
/// populated response still counts as a success.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub moral: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_tone: String,
    #[serde(default, deserialize_with = "clamped_confidence")]
    pub confidence: f64,
    #[serde(default)]
    pub target_tone: Option<String>,
    #[serde(default)]
    pub transformed_text: Option<String>,
}

impl AnalysisResult {
    /// Confidence as a percentage with one decimal, e.g. `87.0%`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn clamped_confidence<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?.unwrap_or_default();
    if value.is_nan() {
        return Ok(0.0);
    }
    Ok(value.clamp(0.0, 1.0))
}
