use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

use super::respond::CapturedJson;

/// Longest access log line, in characters, before it is cut and suffixed with `…`.
pub const MAX_LOG_LINE: usize = 80;

const API_PREFIX: &str = "/api";

/// Cut `line` to at most `max` characters, replacing the tail with `…` when it is cut.
pub fn truncate_log_line(line: &str, max: usize) -> String {
    if line.chars().count() <= max {
        return line.to_string();
    }
    let mut cut: String = line.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// One line per `/api` request: method, path, status, latency and, when the handler
/// answered with JSON, the rendered body.
pub async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let start = Instant::now();
    let resp = next.run(req).await;

    if !path.starts_with(API_PREFIX) {
        return resp;
    }

    let status = resp.status();
    let latency_ms = start.elapsed().as_millis();

    let mut line = format!(
        "{} {} {} in {}ms",
        method.as_str(),
        path,
        status.as_u16(),
        latency_ms
    );
    if let Some(CapturedJson(body)) = resp.extensions().get::<CapturedJson>() {
        line.push_str(" :: ");
        line.push_str(body);
    }
    let line = truncate_log_line(&line, MAX_LOG_LINE);

    if status.is_server_error() {
        error!("{line}");
    } else if status.is_client_error() {
        warn!("{line}");
    } else {
        info!("{line}");
    }

    resp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_are_untouched() {
        let line = "POST /api/contact 200 in 3ms";
        assert_eq!(truncate_log_line(line, MAX_LOG_LINE), line);
    }

    #[test]
    fn long_lines_are_cut_to_the_limit_with_an_ellipsis() {
        let line = format!("POST /api/contact 200 in 3ms :: {}", "x".repeat(200));
        let cut = truncate_log_line(&line, MAX_LOG_LINE);

        assert_eq!(cut.chars().count(), MAX_LOG_LINE);
        assert!(cut.ends_with('…'));
        assert!(line.starts_with(cut.trim_end_matches('…')));
    }

    #[test]
    fn exactly_max_is_not_cut() {
        let line = "y".repeat(MAX_LOG_LINE);
        assert_eq!(truncate_log_line(&line, MAX_LOG_LINE), line);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let line = "é".repeat(MAX_LOG_LINE);
        assert_eq!(truncate_log_line(&line, MAX_LOG_LINE), line);
    }
}
