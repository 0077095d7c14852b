use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitAnswersPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "student_name is required"))]
    pub student_name: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "student_class is required"))]
    pub student_class: String,

    #[serde(default)]
    #[validate(range(min = 1, message = "exam_id is required"))]
    pub exam_id: i64,

    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub question_id: i64,
    pub choice_id: i64,
}
