//! Mahasiswa endpoints
//!
//! One handler per statement; each leases a pooled connection for the
//! duration of that statement only.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::StudentRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{StudentForm, StudentId};
use crate::http::server::AppState;
use crate::models::Student;

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// POST /mahasiswa/ - create a record, echo the submitted fields
async fn create_student(
    State(state): State<Arc<AppState>>,
    StudentForm(student): StudentForm,
) -> Result<Json<Student>, ApiError> {
    StudentRepo::new(&state.pool).create(&student).await?;
    Ok(Json(student))
}

/// GET /mahasiswa/ - list every record
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = StudentRepo::new(&state.pool).list().await?;
    Ok(Json(students))
}

/// GET /mahasiswa/{id}
async fn get_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<Student>, ApiError> {
    let student = StudentRepo::new(&state.pool).get(id).await?;
    Ok(Json(student))
}

/// PUT /mahasiswa/{id} - replace all five fields, echo them back
async fn update_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
    StudentForm(student): StudentForm,
) -> Result<Json<Student>, ApiError> {
    StudentRepo::new(&state.pool).update(id, &student).await?;
    Ok(Json(student))
}

/// DELETE /mahasiswa/{id} - succeeds whether or not the row existed
async fn delete_student(
    State(state): State<Arc<AppState>>,
    StudentId(id): StudentId,
) -> Result<Json<MessageResponse>, ApiError> {
    StudentRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Mahasiswa deleted",
    }))
}

/// Mahasiswa routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/mahasiswa", get(list_students).post(create_student))
        .route("/mahasiswa/", get(list_students).post(create_student))
        .route(
            "/mahasiswa/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
