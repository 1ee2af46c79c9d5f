mod common;

use axum::http::StatusCode;
use common::{TestDb, capture_logs, get, post_json};
use contact_site::server::access_log::MAX_LOG_LINE;
use tower::ServiceExt;

const VALID: &str = r#"{"name":"Ada","email":"ada@example.com","subject":"Hi","message":"Hello"}"#;

/// The access log message, without the level prefix the formatter adds.
fn message_from<'a>(line: &'a str, request: &str) -> &'a str {
    let start = line.find(request).expect("line does not contain the request");
    &line[start..]
}

#[tokio::test]
async fn api_request_logs_one_truncated_line_with_the_response_json() {
    let db = TestDb::new("access-log-api").await;
    let app = db.app();
    let (logs, _guard) = capture_logs();

    let resp = app
        .clone()
        .oneshot(post_json("/api/contact", VALID))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::OK);

    let lines = logs.lines_containing("POST /api/contact");
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line = &lines[0];
    assert!(line.contains("INFO"), "{line}");

    let message = message_from(line, "POST /api/contact");
    assert!(message.starts_with("POST /api/contact 200 in "), "{message}");
    assert!(message.contains("ms :: {\""), "{message}");
    assert_eq!(message.chars().count(), MAX_LOG_LINE, "{message}");
    assert!(message.ends_with('…'), "{message}");

    db.cleanup().await;
}

#[tokio::test]
async fn client_errors_are_logged_as_warnings() {
    let db = TestDb::new("access-log-warn").await;
    let app = db.app();
    let (logs, _guard) = capture_logs();

    let resp = app
        .clone()
        .oneshot(post_json("/api/contact", "{}"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let lines = logs.lines_containing("POST /api/contact 400");
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].contains("WARN"), "{}", lines[0]);
    assert!(lines[0].contains(":: {\"error\":"), "{}", lines[0]);

    db.cleanup().await;
}

#[tokio::test]
async fn non_api_requests_are_not_logged() {
    let db = TestDb::new("access-log-skip").await;
    let app = db.app();
    let (logs, _guard) = capture_logs();

    let resp = app
        .clone()
        .oneshot(get("/nothing"))
        .await
        .expect("request failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    assert!(logs.lines_containing("/nothing").is_empty(), "{:?}", logs.lines());

    db.cleanup().await;
}
