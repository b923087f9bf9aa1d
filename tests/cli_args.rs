//! Tests for the binary's command-line behaviour.

mod common;

use common::{MockResponse, MockService};
use std::process::{Command, Output};
use tempfile::TempDir;

fn analyzer_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_text-analyzer"));
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("TEXT_ANALYZER_LOG");
    cmd
}

async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("Failed to execute command"))
        .await
        .unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = analyzer_cmd(&dir).arg("--help").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("analyze"));
    assert!(stdout.contains("tones"));
}

#[test]
fn test_tones_lists_catalogue() {
    let dir = TempDir::new().unwrap();
    let output = analyzer_cmd(&dir).arg("tones").output().unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.contains("Scholarly and research-oriented"));
}

#[test]
fn test_unknown_tone_is_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    let output = analyzer_cmd(&dir)
        .args(["analyze", "Hello", "--tone", "sarcastic"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("sarcastic"));
}

#[test]
fn test_blank_text_exits_with_validation_error() {
    let dir = TempDir::new().unwrap();
    let output = analyzer_cmd(&dir)
        .args(["analyze", "   ", "--api-base", "http://127.0.0.1:9/api"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Please enter some text to analyze"));
}

#[test]
fn test_invalid_api_base_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let output = analyzer_cmd(&dir)
        .args(["analyze", "Hello", "--api-base", "not a url"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid api.base_url"));
}

#[tokio::test]
async fn test_analyze_renders_result() {
    let service = MockService::start().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--tone", "formal", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Be kind"));
    assert!(stdout.contains("confidence 87.0%"));
    assert!(stdout.contains("Greetings, world."));
}

#[tokio::test]
async fn test_analyze_json_output() {
    let service = MockService::start().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--json", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["moral"], "Be kind");
    assert_eq!(value["keywords"], serde_json::json!(["kind"]));
}

#[tokio::test]
async fn test_service_error_exits_with_detail() {
    let service = MockService::start().await;
    service
        .enqueue_response(MockResponse::detail(500, "model unavailable"))
        .await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: model unavailable"));
}

#[tokio::test]
async fn test_timeout_resets_and_fails() {
    let service = MockService::start().await;
    service
        .enqueue_response(MockResponse::default().with_delay(5_000))
        .await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--timeout", "1", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timed out after 1s"));
}

#[tokio::test]
async fn test_near_limit_text_warns_before_submitting() {
    let service = MockService::start().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--max-length", "12", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Warning: near limit (11 / 12 characters)"),
        "unexpected stderr: {}",
        stderr
    );
    assert_eq!(service.captured_requests().await.len(), 1);
}

#[tokio::test]
async fn test_short_text_does_not_warn() {
    let service = MockService::start().await;
    let dir = TempDir::new().unwrap();
    let mut cmd = analyzer_cmd(&dir);
    cmd.args(["analyze", "Hello world", "--api-base"])
        .arg(service.api_base());

    let output = run_blocking(cmd).await;

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("near limit"));
}
