use crate::dto::submission_dto::SubmitAnswersPayload;
use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::services::identity_service::IdentityService;
use serde::Serialize;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Debug, Serialize)]
pub struct SubmissionReceipt {
    pub student_id: i64,
    pub recorded: usize,
}

#[derive(Clone)]
pub struct SubmissionService {
    pool: SqlitePool,
    identity: IdentityService,
}

impl SubmissionService {
    pub fn new(pool: SqlitePool, identity: IdentityService) -> Self {
        Self { pool, identity }
    }

    /// Records a student's answer set for an exam. The whole batch lands
    /// in one transaction; an unknown exam, or an answer whose question or
    /// choice does not belong to the exam, rejects the entire submission.
    pub async fn submit_answers(&self, payload: SubmitAnswersPayload) -> Result<SubmissionReceipt> {
        payload.validate()?;

        let student_id = self
            .identity
            .resolve_student(&payload.student_name, &payload.student_class)
            .await?;

        let mut tx = self.pool.begin().await?;

        let exam_exists: Option<i64> =
            sqlx::query_scalar("SELECT exam_id FROM exams WHERE exam_id = $1")
                .bind(payload.exam_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exam_exists.is_none() {
            return Err(Error::BadRequest(format!(
                "Unknown exam: {}",
                payload.exam_id
            )));
        }

        for answer in &payload.answers {
            let owned: Option<i64> = sqlx::query_scalar(
                r#"
                SELECT q.question_id
                FROM questions q
                JOIN choices c ON c.question_id = q.question_id
                WHERE q.exam_id = $1 AND q.question_id = $2 AND c.choice_id = $3
                "#,
            )
            .bind(payload.exam_id)
            .bind(answer.question_id)
            .bind(answer.choice_id)
            .fetch_optional(&mut *tx)
            .await?;
            if owned.is_none() {
                return Err(Error::BadRequest(format!(
                    "Choice {} of question {} does not belong to exam {}",
                    answer.choice_id, answer.question_id, payload.exam_id
                )));
            }

            sqlx::query(
                "INSERT INTO answers (student_id, exam_id, question_id, choice_id) VALUES ($1, $2, $3, $4)",
            )
            .bind(student_id)
            .bind(payload.exam_id)
            .bind(answer.question_id)
            .bind(answer.choice_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::info!(
            student_id,
            exam_id = payload.exam_id,
            recorded = payload.answers.len(),
            "Submission recorded"
        );
        Ok(SubmissionReceipt {
            student_id,
            recorded: payload.answers.len(),
        })
    }

    /// Answer rows one student has recorded for one exam, oldest first.
    /// Scoring is not done here; a grading consumer joins these against
    /// the exam's `is_correct`/`score` columns.
    pub async fn answers_for_student(&self, exam_id: i64, student_id: i64) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT answer_id, student_id, exam_id, question_id, choice_id
            FROM answers
            WHERE exam_id = $1 AND student_id = $2
            ORDER BY answer_id
            "#,
        )
        .bind(exam_id)
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(answers)
    }
}
