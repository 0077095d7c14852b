use crate::error::{Error, Result};
use crate::models::student::Student;
use crate::models::teacher::Teacher;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct IdentityService {
    pool: SqlitePool,
}

impl IdentityService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolves a student to a stable id for (name, class), inserting the
    /// row if absent. Single upsert statement, so two racing calls for the
    /// same pair converge on one row.
    pub async fn resolve_student(&self, name: &str, class: &str) -> Result<i64> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, class)
            VALUES ($1, $2)
            ON CONFLICT (name, class) DO UPDATE SET name = excluded.name
            RETURNING student_id, name, class
            "#,
        )
        .bind(name)
        .bind(class)
        .fetch_one(&self.pool)
        .await?;
        Ok(student.student_id)
    }

    pub async fn lookup_teacher_by_code(&self, code: &str) -> Result<Teacher> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "SELECT teacher_id, name, code FROM teachers WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("No teacher with that code".to_string()))?;
        Ok(teacher)
    }

    /// Inserts the single default teacher when the table is empty.
    pub async fn seed_default_teacher(&self, name: &str, code: &str) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
            .fetch_one(&self.pool)
            .await?;
        if count == 0 {
            sqlx::query("INSERT INTO teachers (name, code) VALUES ($1, $2)")
                .bind(name)
                .bind(code)
                .execute(&self.pool)
                .await?;
            tracing::info!("Seeded default teacher \"{}\"", name);
        }
        Ok(())
    }
}
