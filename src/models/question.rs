use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One scored prompt inside an exam. Sibling order is the question_id
/// order, which equals authoring input order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub question_id: i64,
    pub exam_id: i64,
    pub question_text: String,
    pub score: i64,
}

/// One selectable option of a question, flagged correct or not.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Choice {
    pub choice_id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub is_correct: bool,
}
