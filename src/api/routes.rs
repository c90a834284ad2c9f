//! API Routes
//!
//! Configures the Axum router with all file server endpoints.

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{d20_handler, date_handler, file_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /d20` - Random integer in 1..=20
/// - `GET /date` - Server local time
/// - `GET /<path>` - File from the document root, through the cache
///
/// Any other method on any path gets the 404 page. Routes accept every
/// method and reject non-GET themselves, so HEAD and friends are not
/// answered by the GET handler.
///
/// # Middleware
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/d20", any(d20_handler))
        .route("/date", any(date_handler))
        .fallback(file_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheStore, CachedFile};
    use axum::{
        body::{to_bytes, Body, Bytes},
        http::{header, Request, StatusCode},
    };
    use std::fs;
    use tower::util::ServiceExt;

    fn create_test_app(root: &std::path::Path) -> (Router, AppState) {
        let page = CachedFile::new("404.html", "text/html", Bytes::from_static(b"404"), 3);
        let state = AppState::new(CacheStore::new(10), root, page);
        (create_router(state.clone()), state)
    }

    fn request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_d20_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = create_test_app(dir.path());

        let response = app.oneshot(request("GET", "/d20")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = std::str::from_utf8(&body).unwrap();
        assert!(text.ends_with('\n'));
        let roll: u8 = text.trim().parse().unwrap();
        assert!((1..=20).contains(&roll));
    }

    #[tokio::test]
    async fn test_d20_post_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = create_test_app(dir.path());

        let response = app.oneshot(request("POST", "/d20")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_date_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = create_test_app(dir.path());

        let response = app.oneshot(request("GET", "/date")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_head_is_404() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"A").unwrap();
        let (app, _) = create_test_app(dir.path());

        let response = app.oneshot(request("HEAD", "/a.txt")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_file_endpoint() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), b"<h1>hi</h1>").unwrap();
        let (app, state) = create_test_app(dir.path());

        let response = app.oneshot(request("GET", "/index.html")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/html");
        assert_eq!(response.headers()[header::CONNECTION], "close");
        assert!(state.cache.read().await.contains("/index.html"));
    }

    #[tokio::test]
    async fn test_missing_file_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = create_test_app(dir.path());

        let response = app.oneshot(request("GET", "/nope.html")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"404");
    }
}
