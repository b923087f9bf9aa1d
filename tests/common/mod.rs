//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use std::net::TcpListener;
use std::sync::Arc;

use text_analyzer::analysis::{AnalysisClient, RequestBuilder};
use text_analyzer::session::AnalysisSession;

pub use mock_service::{CapturedRequest, MockResponse, MockService, SAMPLE_RESULT};

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// API base pointing at a port nothing listens on.
pub fn dead_api_base() -> String {
    format!("http://127.0.0.1:{}/api", free_port())
}

/// Session wired to a real client talking to `api_base`.
pub fn make_session(api_base: &str) -> Arc<AnalysisSession> {
    let client = AnalysisClient::new(api_base).expect("Failed to build client");
    Arc::new(AnalysisSession::new(
        Arc::new(client),
        RequestBuilder::default(),
    ))
}
