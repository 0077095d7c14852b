use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct TeacherLoginPayload {
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeacherLoginResponse {
    pub teacher_id: i64,
    pub name: String,
}
