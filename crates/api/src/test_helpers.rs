use crate::{handler::AppRouter, state::AppState};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use serde_json::Value;
use shared::store::InMemoryStore;
use std::sync::Arc;
use testresult::TestResult;
use tower::ServiceExt;

/// Full router over an empty store, any origin allowed.
pub fn test_app() -> Router {
    AppRouter::build(AppState::new(Arc::new(InMemoryStore::new())), &[])
}

pub fn json_request(method: Method, uri: &str, body: Option<Value>) -> TestResult<Request<Body>> {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))?,
        None => builder.body(Body::empty())?,
    };

    Ok(request)
}

/// Runs one request through the router and decodes the JSON reply.
/// An empty body decodes to `Value::Null`.
pub async fn send(app: &Router, request: Request<Body>) -> TestResult<(StatusCode, Value)> {
    let response = app.clone().oneshot(request).await?;
    let status = response.status();

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, body))
}

pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> TestResult<(StatusCode, Value)> {
    send(app, json_request(method, uri, body)?).await
}
