//! Request ID Middleware
//!
//! Tags every registry call with an id so the use case logs for one call can
//! be correlated. A caller-supplied `x-request-id` is reused when it is short
//! printable ASCII; otherwise a UUID is generated. The id is echoed in the
//! response headers.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderMap, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Longest caller-supplied id accepted verbatim
const MAX_INCOMING_LEN: usize = 128;

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(String);

impl RequestId {
    /// Reuse the caller's id when acceptable, otherwise generate one
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|id| !id.is_empty() && id.len() <= MAX_INCOMING_LEN)
            .map_or_else(|| Self(Uuid::new_v4().to_string()), |id| Self(id.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = RequestId::from_headers(request.headers());

    // Path only: query strings stay out of the logs
    let span = tracing::info_span!(
        "registry_call",
        request_id = %request_id.as_str(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(request_id.clone());

    let mut response = async move {
        let response = next.run(request).await;
        tracing::debug!(status = response.status().as_u16(), "Registry call finished");
        response
    }
    .instrument(span)
    .await;

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), value);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{middleware, routing::get, Extension, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|Extension(id): Extension<RequestId>| async move { id.as_str().to_string() }))
            .layer(middleware::from_fn(request_id_middleware))
    }

    async fn call(request: Request<Body>) -> (String, String) {
        let response = app().oneshot(request).await.unwrap();
        let header = response.headers().get(&REQUEST_ID_HEADER).unwrap().to_str().unwrap().to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (header, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let (header, seen_by_handler) = call(Request::builder().uri("/").body(Body::empty()).unwrap()).await;

        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(header, seen_by_handler);
    }

    #[tokio::test]
    async fn test_reuses_incoming_request_id() {
        let request = Request::builder()
            .uri("/")
            .header("x-request-id", "abc-123")
            .body(Body::empty())
            .unwrap();

        let (header, seen_by_handler) = call(request).await;

        assert_eq!(header, "abc-123");
        assert_eq!(seen_by_handler, "abc-123");
    }

    #[tokio::test]
    async fn test_replaces_oversized_request_id() {
        let request = Request::builder()
            .uri("/")
            .header("x-request-id", "x".repeat(MAX_INCOMING_LEN + 1))
            .body(Body::empty())
            .unwrap();

        let (header, _) = call(request).await;

        assert!(Uuid::parse_str(&header).is_ok());
    }
}
