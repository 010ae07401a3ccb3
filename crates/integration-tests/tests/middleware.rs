mod harness;

use std::sync::{Arc, Mutex};

use faultline_config::Config;
use faultline_core::{DisplaySettings, LogLevel, Logger, Reporter};
use harness::server::TestServer;
use serde_json::json;

#[derive(Default)]
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Logger for CapturingLogger {
    fn log(&self, _level: LogLevel, message: &str) {
        self.lines.lock().unwrap().push(message.to_owned());
    }
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server.get_json("/health").await.unwrap();

    assert_eq!(status, 200);
    assert_eq!(body, json!({ "status": "ok", "catalogedCodes": 10 }));
}

#[tokio::test]
async fn every_cataloged_code_round_trips_over_http() {
    let server = TestServer::start_default().await.unwrap();

    for (code, info) in faultline_core::catalog::entries() {
        let (status, body) = server.get_json(&format!("/errors/{code}")).await.unwrap();

        assert_eq!(status, code);
        assert_eq!(body["statusCode"], code);
        assert_eq!(body["emoji"], info.emoji);
        assert_eq!(body["category"], info.category);
        assert_eq!(body["defaultMsg"], info.default_msg);
        assert_eq!(body["message"], info.default_msg);
        assert!(body["timestamp"].is_string());
    }
}

#[tokio::test]
async fn body_has_the_stable_shape() {
    let server = TestServer::start_default().await.unwrap();

    let (_, body) = server.get_json("/errors/409").await.unwrap();

    let mut keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["category", "defaultMsg", "details", "emoji", "message", "name", "statusCode", "timestamp"]
    );
    assert_eq!(body["name"], "ConflictError");
}

#[tokio::test]
async fn uncataloged_code_uses_unknown_metadata() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server.get_json("/errors/418").await.unwrap();

    assert_eq!(status, 418);
    assert_eq!(body["name"], "StructuredError");
    assert_eq!(body["message"], "Error");
    assert_eq!(body["category"], "Unknown");
}

#[tokio::test]
async fn error_like_body_with_invalid_status_falls_back_to_500() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server
        .post_json("/errors", &json!({ "error": { "reason": "bad" }, "statusCode": "abc" }))
        .await
        .unwrap();

    assert_eq!(status, 500);
    assert_eq!(body["statusCode"], 500);
    assert_eq!(body["message"], r#"{"reason":"bad"}"#);
    assert_eq!(body["category"], "Server Error");
}

#[tokio::test]
async fn unexpected_errors_do_not_leak() {
    let server = TestServer::start_default().await.unwrap();

    let (status, body) = server.get_json("/unexpected").await.unwrap();

    assert_eq!(status, 500);
    assert_eq!(body.as_object().unwrap().len(), 2);
    assert_eq!(body["message"], "Unexpected error");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn reports_are_forwarded_to_bound_logger() {
    let logger = Arc::new(CapturingLogger::default());
    let mut reporter = Reporter::new(DisplaySettings {
        show_emoji: true,
        ..Default::default()
    });
    reporter.set_logger(logger.clone(), LogLevel::Error).unwrap();

    let server = TestServer::start(Config::default(), reporter).await.unwrap();

    let (status, _) = server.get_json("/errors/503").await.unwrap();
    assert_eq!(status, 503);

    let (status, _) = server.get_json("/unexpected").await.unwrap();
    assert_eq!(status, 500);

    let lines = logger.lines.lock().unwrap().clone();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("⚙️ Service unavailable\nStatusCode: 503"));
}
