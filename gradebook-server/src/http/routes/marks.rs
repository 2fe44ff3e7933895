//! Mark endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Mark, MarkUpdate, NewMark, Paginated};

/// POST /marks - record a mark
async fn create_mark(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewMark>,
) -> Result<(StatusCode, Json<Mark>), ApiError> {
    let mark = state.store.create_mark(new).await?;
    tracing::info!(id = mark.id, student_id = mark.student_id, "mark created");

    Ok((StatusCode::CREATED, Json(mark)))
}

/// GET /students/{id}/marks - one page of a student's marks
///
/// An unknown student id yields an empty page, not a 404.
async fn list_marks(
    State(state): State<AppState>,
    RecordId(student_id): RecordId,
    PageQuery(page): PageQuery,
) -> Result<Json<Paginated<Mark>>, ApiError> {
    let marks = state.store.list_marks(student_id, page).await?;
    Ok(Json(marks))
}

/// PUT /marks/{id} - replace subject and score
async fn update_mark(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(update): ValidJson<MarkUpdate>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_mark(id, update).await?;
    Ok(Json(MessageResponse::new("Mark updated successfully")))
}

/// DELETE /marks/{id}
async fn delete_mark(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_mark(id).await?;
    tracing::info!(id, "mark deleted");

    Ok(Json(MessageResponse::new("Mark deleted successfully")))
}

/// Mark routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/marks", post(create_mark))
        .route("/marks/{id}", put(update_mark).delete(delete_mark))
        .route("/students/{id}/marks", get(list_marks))
}
