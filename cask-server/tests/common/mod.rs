//! Shared scaffolding for API tests.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use cask_server::{Config, ServerState, api};

/// A fresh app backed by a data file inside its own temp directory.
/// Keep the `TempDir` alive for as long as the app is in use.
pub async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_data_file(dir.path().join("data.json"));
    let state = ServerState::initialize(&config).await.unwrap();
    (api::build_app(state), dir)
}

/// Fire one request and decode the JSON response (Null for empty bodies).
pub async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send_as(app, method, path, body, None).await
}

/// Same as [`send`] but claiming an identity via the `x-user-id` header.
pub async fn send_as(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
    user_id: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(user_id) = user_id {
        builder = builder.header("x-user-id", user_id);
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Assert the `id-<millis>-<6 alphanumerics>` shape.
pub fn assert_generated_id(id: &str) {
    let parts: Vec<&str> = id.splitn(3, '-').collect();
    assert_eq!(parts.len(), 3, "unexpected id shape: {id}");
    assert_eq!(parts[0], "id");
    assert!(parts[1].chars().all(|c| c.is_ascii_digit()), "bad id: {id}");
    assert_eq!(parts[2].len(), 6, "bad id: {id}");
}
