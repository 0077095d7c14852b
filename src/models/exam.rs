use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Exam {
    pub exam_id: i64,
    pub teacher_id: i64,
    pub subject: String,
    pub class: String,
    pub month: String,
    pub created_at: DateTime<Utc>,
}
