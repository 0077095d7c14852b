use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student's selected choice for one question of one exam.
/// Append-only; resubmissions add new rows.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Answer {
    pub answer_id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub question_id: i64,
    pub choice_id: i64,
}
