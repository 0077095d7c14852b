use serde::{Deserialize, Serialize};
use validator::Validate;

/// Authoring payload: the exam header plus its full question tree.
/// Required header fields deserialize to their empty default so a
/// missing field surfaces as a validation error, not a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExamPayload {
    #[serde(default)]
    #[validate(range(min = 1, message = "teacher_id is required"))]
    pub teacher_id: i64,

    #[serde(default)]
    #[validate(length(min = 1, message = "subject is required"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "class is required"))]
    pub class: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "month is required"))]
    pub month: String,

    #[serde(default)]
    pub questions: Vec<CreateQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestion {
    pub text: String,
    #[serde(default = "default_score")]
    pub score: i64,
    #[serde(default)]
    pub choices: Vec<CreateChoice>,
}

fn default_score() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChoice {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateExamResponse {
    pub exam_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExamListQuery {
    pub class: String,
    pub subject: String,
    pub month: String,
}
