//! Liveness check
//!
//! Answers from process state only, so it stays green while PostgreSQL is
//! unreachable; store failures show up on the data routes instead.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    const fn ok() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(|| async { Json(HealthResponse::ok()) }))
}
