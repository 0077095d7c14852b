use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::exam::Exam;
use crate::models::question::{Choice, Question};
use serde::Serialize;
use sqlx::SqlitePool;

#[derive(Debug, Serialize)]
pub struct QuestionWithChoices {
    #[serde(flatten)]
    pub question: Question,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Serialize)]
pub struct FullExam {
    pub exam: Exam,
    pub questions: Vec<QuestionWithChoices>,
}

#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Exams of one teacher, newest first. Equal timestamps fall back to
    /// id order so the listing stays deterministic.
    pub async fn list_exams_by_teacher(&self, teacher_id: i64) -> Result<Vec<Exam>> {
        let exams = sqlx::query_as::<_, Exam>(
            r#"
            SELECT exam_id, teacher_id, subject, class, month, created_at
            FROM exams
            WHERE teacher_id = $1
            ORDER BY created_at DESC, exam_id DESC
            "#,
        )
        .bind(teacher_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(exams)
    }

    /// Exams visible to a student: exact match on all three fields.
    pub async fn list_exams_for(
        &self,
        class: &str,
        subject: &str,
        month: &str,
    ) -> Result<Vec<Exam>> {
        let exams = sqlx::query_as::<_, Exam>(
            r#"
            SELECT exam_id, teacher_id, subject, class, month, created_at
            FROM exams
            WHERE class = $1 AND subject = $2 AND month = $3
            ORDER BY exam_id
            "#,
        )
        .bind(class)
        .bind(subject)
        .bind(month)
        .fetch_all(&self.pool)
        .await?;
        Ok(exams)
    }

    /// Reconstructs one exam with its questions and each question's
    /// choices, both in authoring order.
    pub async fn get_full_exam(&self, exam_id: i64) -> Result<FullExam> {
        let exam = sqlx::query_as::<_, Exam>(
            "SELECT exam_id, teacher_id, subject, class, month, created_at FROM exams WHERE exam_id = $1",
        )
        .bind(exam_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Exam not found".to_string()))?;

        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT question_id, exam_id, question_text, score
            FROM questions
            WHERE exam_id = $1
            ORDER BY question_id
            "#,
        )
        .bind(exam_id)
        .fetch_all(&self.pool)
        .await?;

        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT c.choice_id, c.question_id, c.choice_text, c.is_correct
            FROM choices c
            JOIN questions q ON q.question_id = c.question_id
            WHERE q.exam_id = $1
            ORDER BY c.choice_id
            "#,
        )
        .bind(exam_id)
        .fetch_all(&self.pool)
        .await?;

        let mut by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
        for choice in choices {
            by_question
                .entry(choice.question_id)
                .or_default()
                .push(choice);
        }

        let questions = questions
            .into_iter()
            .map(|question| QuestionWithChoices {
                choices: by_question
                    .remove(&question.question_id)
                    .unwrap_or_default(),
                question,
            })
            .collect();

        Ok(FullExam { exam, questions })
    }
}
