use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::auth_dto::{TeacherLoginPayload, TeacherLoginResponse},
    error::Result,
    AppState,
};

#[axum::debug_handler]
pub async fn teacher_login(
    State(state): State<AppState>,
    Json(payload): Json<TeacherLoginPayload>,
) -> Result<impl IntoResponse> {
    let teacher = state
        .identity_service
        .lookup_teacher_by_code(&payload.code)
        .await?;
    Ok(Json(TeacherLoginResponse {
        teacher_id: teacher.teacher_id,
        name: teacher.name,
    }))
}
