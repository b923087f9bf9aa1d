//! HTTP client for the remote analysis service.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::time::Instant;

use super::error::AnalysisError;
use super::request::{char_count, AnalysisInput};
use super::result::AnalysisResult;

/// Path appended to the configured API base.
pub const ANALYZE_PATH: &str = "/analyze";

/// Anything that can turn an [`AnalysisInput`] into an [`AnalysisResult`].
///
/// Implementations must settle every call with either variant; failures are
/// never raised past this boundary.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn send(&self, input: AnalysisInput) -> Result<AnalysisResult, AnalysisError>;
}

/// `reqwest`-backed client for `POST <base>/analyze`.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: String,
}

/// Failure body, e.g. `{"detail": "model unavailable"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use an existing `reqwest::Client` (shared pool, custom TLS, ...).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), ANALYZE_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, input: &AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(
            url = %self.endpoint,
            text_chars = char_count(&input.text),
            target_tone = ?input.target_tone,
            "Sending analysis request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .json(input)
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = service_error_message(status, &body);

            tracing::warn!(
                status = %status,
                latency_ms,
                error = %message,
                "Analysis service returned an error"
            );

            return Err(AnalysisError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let result: AnalysisResult =
            serde_json::from_str(&body).map_err(|e| AnalysisError::Decode {
                message: format!("Failed to parse analysis response: {}", e),
            })?;

        tracing::debug!(
            status = %status,
            latency_ms,
            keyword_count = result.keywords.len(),
            transformed = result.transformed_text.is_some(),
            "Analysis completed"
        );

        Ok(result)
    }
}

#[async_trait]
impl AnalysisBackend for AnalysisClient {
    async fn send(&self, input: AnalysisInput) -> Result<AnalysisResult, AnalysisError> {
        self.post(&input).await
    }
}

/// Message for a non-success response: the body's `detail` when it carries
/// one, otherwise a generic message built from the status text.
fn service_error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(detail_text)
        .unwrap_or_else(|| {
            format!(
                "Analysis failed: {}",
                status.canonical_reason().unwrap_or("Unknown Status")
            )
        })
}

fn detail_text(detail: Value) -> Option<String> {
    match detail {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        // FastAPI validation errors send a list of objects here.
        other => Some(other.to_string()),
    }
}
