use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student identity, unique per (name, class) pair. Created lazily on
/// first submission and reused for every later one.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub student_id: i64,
    pub name: String,
    pub class: String,
}
