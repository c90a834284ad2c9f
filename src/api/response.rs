//! Response Assembly
//!
//! Builds responses with the fixed header set every reply carries:
//! `Date`, `Connection: close`, `Content-Length` and `Content-Type`.

use axum::{
    body::{Body, Bytes},
    http::{header, StatusCode},
    response::Response,
};
use chrono::{DateTime, Utc};
use tracing::error;

use crate::cache::CachedFile;

/// Formats a timestamp as an HTTP-date (RFC 7231 IMF-fixdate).
pub fn http_date(now: DateTime<Utc>) -> String {
    now.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Builds a response with the standard header set.
///
/// The body is handed to the HTTP stack as-is, without copying into a
/// fixed-size buffer.
pub fn build_response(status: StatusCode, content_type: &str, body: Bytes) -> Response {
    let content_length = body.len();

    Response::builder()
        .status(status)
        .header(header::DATE, http_date(Utc::now()))
        .header(header::CONNECTION, "close")
        .header(header::CONTENT_LENGTH, content_length)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap_or_else(|e| {
            error!("Failed to build {} response: {}", status, e);
            let mut fallback = Response::new(Body::empty());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
}

/// 200 OK carrying a cached or freshly loaded file.
pub fn file_response(file: &CachedFile) -> Response {
    build_response(StatusCode::OK, &file.content_type, file.content.clone())
}

/// 404 Not Found carrying the server's own error page.
pub fn not_found_response(page: &CachedFile) -> Response {
    build_response(StatusCode::NOT_FOUND, &page.content_type, page.content.clone())
}

/// 200 OK with a plain-text body.
pub fn text_response(body: String) -> Response {
    build_response(StatusCode::OK, "text/plain", Bytes::from(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_http_date_format() {
        let ts = Utc.with_ymd_and_hms(1994, 11, 6, 8, 49, 37).unwrap();
        assert_eq!(http_date(ts), "Sun, 06 Nov 1994 08:49:37 GMT");
    }

    #[test]
    fn test_build_response_headers() {
        let body = Bytes::from_static(b"<p>hi</p>");
        let response = build_response(StatusCode::OK, "text/html", body);

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::CONNECTION], "close");
        assert_eq!(headers[header::CONTENT_LENGTH], "9");
        assert_eq!(headers[header::CONTENT_TYPE], "text/html");
        assert!(headers[header::DATE].to_str().unwrap().ends_with("GMT"));
    }

    #[test]
    fn test_not_found_response_uses_page() {
        let page = CachedFile::new("404.html", "text/html", Bytes::from_static(b"gone"), 4);
        let response = not_found_response(&page);

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "4");
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
    }
}
