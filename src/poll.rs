// src/poll.rs
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::{Choice, NewQuestion, Question};

pub async fn create_question(pool: &SqlitePool, new: &NewQuestion) -> Result<Question, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO polls_question (question_text, pub_date)
        VALUES ($1, $2)
        RETURNING id, question_text, pub_date
        "#,
    )
    .bind(&new.question_text)
    .bind(new.pub_date)
    .fetch_one(pool)
    .await
}

/// Fails with a foreign key violation when `question_id` does not exist.
pub async fn create_choice(
    pool: &SqlitePool,
    question_id: i64,
    choice_text: &str,
) -> Result<Choice, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        r#"
        INSERT INTO polls_choice (question_id, choice_text, votes)
        VALUES ($1, $2, 0)
        RETURNING id, question_id, choice_text, votes
        "#,
    )
    .bind(question_id)
    .bind(choice_text)
    .fetch_one(pool)
    .await
}

/// The most recently published questions, newest first, skipping future ones.
pub async fn latest_questions(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    limit: u32,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_text, pub_date
        FROM polls_question
        WHERE pub_date <= $1
        ORDER BY pub_date DESC
        LIMIT $2
        "#,
    )
    .bind(now)
    .bind(i64::from(limit))
    .fetch_all(pool)
    .await
}

pub async fn visible_question(
    pool: &SqlitePool,
    question_id: i64,
    now: DateTime<Utc>,
) -> Result<Option<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question_text, pub_date
        FROM polls_question
        WHERE id = $1 AND pub_date <= $2
        "#,
    )
    .bind(question_id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

pub async fn choices_for(pool: &SqlitePool, question_id: i64) -> Result<Vec<Choice>, sqlx::Error> {
    sqlx::query_as::<_, Choice>(
        r#"
        SELECT id, question_id, choice_text, votes
        FROM polls_choice
        WHERE question_id = $1
        ORDER BY id
        "#,
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Adds one vote to the choice. Returns `false` when the choice does not
/// belong to the question.
pub async fn vote(pool: &SqlitePool, question_id: i64, choice_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE polls_choice
        SET votes = votes + 1
        WHERE id = $1 AND question_id = $2
        "#,
    )
    .bind(choice_id)
    .bind(question_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() == 1)
}
