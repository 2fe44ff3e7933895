//! API error types with IntoResponse
//!
//! Every error renders as `{"error": <message>}` with a matching status.

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::DbError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Malformed body or path parameter (400)
    BadRequest { message: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// No route matches the path (404)
    NoRoute { method: Method, path: String },

    /// Path exists but not for this method (405)
    MethodNotAllowed { method: Method, path: String },

    /// Store failure (500, message passed through)
    Database(DbError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::NoRoute { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::BadRequest { message } => message.clone(),
            Self::NotFound { resource, .. } => format!("{} not found", resource),
            Self::NoRoute { method, path } => format!("Cannot {} {}", method, path),
            Self::MethodNotAllowed { method, path } => {
                format!("Method {} not allowed on {}", method, path)
            }
            Self::Database(e) => e.client_message(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Database(e) => tracing::error!("Database error: {}", e),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "lookup missed")
            }
            Self::BadRequest { message } => tracing::debug!("Rejected request: {}", message),
            Self::NoRoute { .. } | Self::MethodNotAllowed { .. } => {
                tracing::debug!("Unroutable request: {}", self.message())
            }
        }

        let body = json!({ "error": self.message() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            _ => Self::Database(e),
        }
    }
}
