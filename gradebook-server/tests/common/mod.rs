//! Shared helpers for router tests

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use gradebook_server::{build_router, AppState, MemoryStore, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory store, plus a handle to that store.
pub fn app() -> (Router, MemoryStore) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("gradebook_server=debug")
        .with_test_writer()
        .try_init();

    let store = MemoryStore::new();
    let router = build_router(AppState::new(store.clone()), &ServerConfig::default());
    (router, store)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

/// Create a student and return its id.
pub async fn seed_student(app: &Router, name: &str, age: i64) -> i64 {
    let (status, body) = post(
        app,
        "/students",
        serde_json::json!({
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase()),
            "age": age,
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

/// Record a mark and return its id.
pub async fn seed_mark(app: &Router, student_id: i64, subject: &str, score: f64) -> i64 {
    let (status, body) = post(
        app,
        "/marks",
        serde_json::json!({"student_id": student_id, "subject": subject, "score": score}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_i64().unwrap()
}

pub fn ids(page: &Value) -> Vec<i64> {
    page["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect()
}
