use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{dto::submission_dto::SubmitAnswersPayload, error::Result, AppState};

#[axum::debug_handler]
pub async fn submit(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAnswersPayload>,
) -> Result<impl IntoResponse> {
    let receipt = state.submission_service.submit_answers(payload).await?;
    Ok(Json(json!({
        "ok": true,
        "student_id": receipt.student_id,
        "recorded": receipt.recorded,
    })))
}
