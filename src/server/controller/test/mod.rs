use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};

mod docs;

/// Builds the full router over a fresh in-memory database.
///
/// The context is returned alongside the router so the database outlives the test.
async fn app() -> (TestContext, Router) {
    app_with_public_url(None).await
}

async fn app_with_public_url(public_url: Option<&str>) -> (TestContext, Router) {
    let test = TestBuilder::new().with_drone_tables().build().await.unwrap();
    let db = test.db.clone().unwrap();

    let router = router().with_state(AppState::new(db, public_url.map(str::to_string)));

    (test, router)
}

/// Sends a request and returns the status with the JSON body, `Value::Null` when empty.
async fn send(
    router: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    send_request(router, request).await
}

async fn send_request(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

/// Sends a raw JSON body, for payloads `json!` cannot express.
async fn send_raw(router: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send_request(router, request).await
}
