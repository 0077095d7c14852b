use crate::dto::exam_dto::CreateExamPayload;
use crate::error::Result;
use chrono::Utc;
use sqlx::SqlitePool;
use validator::Validate;

#[derive(Clone)]
pub struct ExamService {
    pool: SqlitePool,
}

impl ExamService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the exam together with its whole question/choice tree in
    /// one transaction. The exam id is handed out only after commit, so a
    /// partially-authored exam is never observable and any mid-batch
    /// storage failure leaves no rows behind.
    pub async fn create_exam(&self, payload: CreateExamPayload) -> Result<i64> {
        payload.validate()?;

        let mut tx = self.pool.begin().await?;

        let exam_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO exams (teacher_id, subject, class, month, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING exam_id
            "#,
        )
        .bind(payload.teacher_id)
        .bind(&payload.subject)
        .bind(&payload.class)
        .bind(&payload.month)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        // Children are appended in input order; their auto-increment ids
        // are the ordering the catalog reads back.
        for question in &payload.questions {
            let question_id: i64 = sqlx::query_scalar(
                r#"
                INSERT INTO questions (exam_id, question_text, score)
                VALUES ($1, $2, $3)
                RETURNING question_id
                "#,
            )
            .bind(exam_id)
            .bind(&question.text)
            .bind(question.score)
            .fetch_one(&mut *tx)
            .await?;

            for choice in &question.choices {
                sqlx::query(
                    "INSERT INTO choices (question_id, choice_text, is_correct) VALUES ($1, $2, $3)",
                )
                .bind(question_id)
                .bind(&choice.text)
                .bind(choice.is_correct)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        tracing::info!(exam_id, teacher_id = payload.teacher_id, "Exam created");
        Ok(exam_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::exam_dto::{CreateChoice, CreateQuestion};
    use crate::error::Error;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test pool");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        sqlx::query("INSERT INTO teachers (name, code) VALUES ($1, $2)")
            .bind("Ahmed")
            .bind("TCH123")
            .execute(&pool)
            .await
            .expect("Failed to seed teacher");

        pool
    }

    fn math_payload() -> CreateExamPayload {
        CreateExamPayload {
            teacher_id: 1,
            subject: "Math".into(),
            class: "5A".into(),
            month: "Jan".into(),
            questions: vec![CreateQuestion {
                text: "2+2?".into(),
                score: 5,
                choices: vec![
                    CreateChoice {
                        text: "4".into(),
                        is_correct: true,
                    },
                    CreateChoice {
                        text: "5".into(),
                        is_correct: false,
                    },
                ],
            }],
        }
    }

    #[tokio::test]
    async fn creates_exam_with_question_tree() {
        let pool = setup_test_db().await;
        let service = ExamService::new(pool.clone());

        let exam_id = service.create_exam(math_payload()).await.unwrap();
        assert!(exam_id >= 1);

        let questions: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM questions WHERE exam_id = $1")
                .bind(exam_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(questions, 1);

        let choices: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM choices c JOIN questions q ON q.question_id = c.question_id WHERE q.exam_id = $1",
        )
        .bind(exam_id)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(choices, 2);
    }

    #[tokio::test]
    async fn exam_without_questions_is_allowed() {
        let service = ExamService::new(setup_test_db().await);

        let payload = CreateExamPayload {
            questions: vec![],
            ..math_payload()
        };
        service.create_exam(payload).await.unwrap();
    }

    #[tokio::test]
    async fn missing_subject_is_rejected_and_writes_nothing() {
        let pool = setup_test_db().await;
        let service = ExamService::new(pool.clone());

        let payload = CreateExamPayload {
            subject: "".into(),
            ..math_payload()
        };
        let err = service.create_exam(payload).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let exams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exams")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(exams, 0);
    }

    #[tokio::test]
    async fn missing_teacher_id_is_rejected() {
        let service = ExamService::new(setup_test_db().await);

        let payload = CreateExamPayload {
            teacher_id: 0,
            ..math_payload()
        };
        let err = service.create_exam(payload).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_teacher_fails_and_rolls_back() {
        let pool = setup_test_db().await;
        let service = ExamService::new(pool.clone());

        let payload = CreateExamPayload {
            teacher_id: 999,
            ..math_payload()
        };
        let err = service.create_exam(payload).await.unwrap_err();
        assert!(matches!(err, Error::Database(_)));

        let exams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exams")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(exams, 0);
        let questions: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(questions, 0);
    }
}
