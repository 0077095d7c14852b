pub mod auth;
pub mod exam_routes;
pub mod health;
pub mod submission_routes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::middleware::rate_limit;
use crate::AppState;

/// Assembles the application router: liveness probe, the teacher-facing
/// authoring group and the public student group, each behind its own
/// request-rate cap.
pub fn router(state: AppState, teacher_rps: u32, public_rps: u32) -> Router {
    let base_routes = Router::new().route("/health", get(health::health));

    let teacher_api = Router::new()
        .route("/api/teacher-login", post(auth::teacher_login))
        .route("/api/create-exam", post(exam_routes::create_exam))
        .route(
            "/api/teacher-exams/:teacher_id",
            get(exam_routes::list_teacher_exams),
        )
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(teacher_rps),
            rate_limit::rps_middleware,
        ));

    let public_api = Router::new()
        .route("/api/exam/:exam_id", get(exam_routes::get_exam))
        .route("/api/exams", get(exam_routes::list_exams))
        .route("/api/submit", post(submission_routes::submit))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(public_rps),
            rate_limit::rps_middleware,
        ));

    base_routes
        .merge(teacher_api)
        .merge(public_api)
        .with_state(state)
}
