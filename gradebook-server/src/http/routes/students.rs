//! Student endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::MessageResponse;
use crate::http::error::ApiError;
use crate::http::extractors::{PageQuery, RecordId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Paginated, Student, StudentInput, StudentWithMarks};

/// POST /students - create a student
async fn create_student(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<StudentInput>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let student = state.store.create_student(input).await?;
    tracing::info!(id = student.id, "student created");

    Ok((StatusCode::CREATED, Json(student)))
}

/// GET /students - list students with pagination
async fn list_students(
    State(state): State<AppState>,
    PageQuery(page): PageQuery,
) -> Result<Json<Paginated<Student>>, ApiError> {
    let students = state.store.list_students(page).await?;
    Ok(Json(students))
}

/// GET /students/{id} - a student and all of their marks
///
/// The two reads are independent statements; a delete landing between them
/// is not guarded against.
async fn get_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<StudentWithMarks>, ApiError> {
    let student = state.store.get_student(id).await?;
    let marks = state.store.marks_for_student(id).await?;

    Ok(Json(StudentWithMarks { student, marks }))
}

/// PUT /students/{id} - replace name, email and age
async fn update_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidJson(input): ValidJson<StudentInput>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.update_student(id, input).await?;
    Ok(Json(MessageResponse::new("Student updated successfully")))
}

/// DELETE /students/{id}
async fn delete_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<MessageResponse>, ApiError> {
    state.store.delete_student(id).await?;
    tracing::info!(id, "student deleted");

    Ok(Json(MessageResponse::new("Student deleted successfully")))
}

/// Student routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
