use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::exam_dto::{CreateExamPayload, CreateExamResponse, ExamListQuery},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn create_exam(
    State(state): State<AppState>,
    Json(payload): Json<CreateExamPayload>,
) -> Result<impl IntoResponse> {
    let exam_id = state.exam_service.create_exam(payload).await?;
    Ok((StatusCode::CREATED, Json(CreateExamResponse { exam_id })))
}

#[axum::debug_handler]
pub async fn list_teacher_exams(
    State(state): State<AppState>,
    Path(teacher_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let exams = state
        .catalog_service
        .list_exams_by_teacher(teacher_id)
        .await?;
    Ok(Json(exams))
}

#[axum::debug_handler]
pub async fn get_exam(
    State(state): State<AppState>,
    Path(exam_id): Path<i64>,
) -> Result<impl IntoResponse> {
    let full = state.catalog_service.get_full_exam(exam_id).await?;
    Ok(Json(full))
}

#[axum::debug_handler]
pub async fn list_exams(
    State(state): State<AppState>,
    Query(query): Query<ExamListQuery>,
) -> Result<impl IntoResponse> {
    let exams = state
        .catalog_service
        .list_exams_for(&query.class, &query.subject, &query.month)
        .await?;
    Ok(Json(exams))
}
