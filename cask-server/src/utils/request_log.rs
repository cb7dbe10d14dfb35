//! Access-log middleware.

use std::time::Instant;

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::info;

/// Log one line per request: id, method, path, status, latency.
///
/// The request id is taken from an `x-request-id` header when the client
/// sends one, otherwise generated, and echoed back on the response so load
/// balancer logs and server logs can be joined.
pub async fn log_request(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    info!(
        target: "http_request",
        %request_id,
        %method,
        %path,
        status = response.status().as_u16(),
        latency_ms,
        "request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
