//! One-line access log for `/api` requests.
//!
//! Each line reads `<METHOD> <path> <status> in <ms>ms`, followed by
//! ` :: <body>` when the response is JSON, and is cut to 80 characters.

use std::time::Instant;

use axum::body::{to_bytes, Body};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

use crate::observability;

const MAX_LINE_CHARS: usize = 80;

pub async fn log_api_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(req).await;
    let elapsed = start.elapsed();
    observability::record_request(method.as_str(), response.status().as_u16(), elapsed);

    if !path.starts_with("/api") {
        return response;
    }

    let status = response.status().as_u16();
    let millis = elapsed.as_millis();
    if !is_json(response.headers()) {
        info!(source = "http", "{}", format_log_line(method.as_str(), &path, status, millis, None));
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(source = "http", %path, error = %e, "failed to buffer response body");
            return Response::from_parts(parts, Body::empty());
        }
    };
    let line = format_log_line(method.as_str(), &path, status, millis, Some(&bytes));
    info!(source = "http", "{}", line);
    Response::from_parts(parts, Body::from(bytes))
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/json"))
}

pub fn format_log_line(
    method: &str,
    path: &str,
    status: u16,
    millis: u128,
    body: Option<&[u8]>,
) -> String {
    let mut line = format!("{method} {path} {status} in {millis}ms");
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        line.push_str(" :: ");
        line.push_str(&String::from_utf8_lossy(body));
    }
    truncate_line(line)
}

fn truncate_line(line: String) -> String {
    if line.chars().count() <= MAX_LINE_CHARS {
        return line;
    }
    let mut cut: String = line.chars().take(MAX_LINE_CHARS - 1).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_without_body() {
        assert_eq!(format_log_line("GET", "/api/notes", 500, 3, None), "GET /api/notes 500 in 3ms");
    }

    #[test]
    fn body_is_appended() {
        let line = format_log_line("POST", "/api/scores", 201, 1, Some(br#"{"id":1}"#));
        assert_eq!(line, r#"POST /api/scores 201 in 1ms :: {"id":1}"#);
    }

    #[test]
    fn empty_body_is_skipped() {
        let line = format_log_line("GET", "/api/scores", 200, 0, Some(b""));
        assert_eq!(line, "GET /api/scores 200 in 0ms");
    }

    #[test]
    fn long_lines_are_cut_to_eighty_chars() {
        let body = "x".repeat(200);
        let line = format_log_line("GET", "/api/notes", 200, 12, Some(body.as_bytes()));
        assert_eq!(line.chars().count(), 80);
        assert!(line.ends_with('…'));
        assert!(line.starts_with("GET /api/notes 200 in 12ms :: xxx"));
    }

    #[test]
    fn exactly_eighty_chars_is_kept() {
        let prefix = "GET /api/notes 200 in 1ms :: ";
        let body = "y".repeat(80 - prefix.len());
        let line = format_log_line("GET", "/api/notes", 200, 1, Some(body.as_bytes()));
        assert_eq!(line.chars().count(), 80);
        assert!(!line.ends_with('…'));
    }

    #[test]
    fn json_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_json(&headers));
        headers.insert(CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(is_json(&headers));
        headers.insert(CONTENT_TYPE, "text/html; charset=utf-8".parse().unwrap());
        assert!(!is_json(&headers));
    }
}
