use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A teacher account. Created once at bootstrap, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub teacher_id: i64,
    pub name: String,
    pub code: String,
}
