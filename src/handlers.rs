// handlers.rs
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::error::{AppError, AppResult};
use crate::models::VoteForm;
use crate::poll;
use crate::render::{self, DetailContext, IndexContext, ResultsContext, NO_CHOICE_SELECTED};
use crate::routes::{AppState, Route};

/// An id segment that is not an `i64` names no question, so it is a 404
/// rather than a bad request.
pub fn parse_question_id(segment: &str) -> AppResult<i64> {
    segment.parse().map_err(|_| AppError::NotFound)
}

pub async fn index_context(
    pool: &SqlitePool,
    now: DateTime<Utc>,
    page_size: u32,
) -> AppResult<IndexContext> {
    let latest_question_list = poll::latest_questions(pool, now, page_size).await?;
    Ok(IndexContext {
        latest_question_list,
    })
}

/// Future and missing questions both come back as `NotFound`.
pub async fn detail_context(
    pool: &SqlitePool,
    question_id: i64,
    now: DateTime<Utc>,
) -> AppResult<DetailContext> {
    let question = poll::visible_question(pool, question_id, now)
        .await?
        .ok_or(AppError::NotFound)?;
    let choices = poll::choices_for(pool, question.id).await?;

    Ok(DetailContext {
        question,
        choices,
        error_message: None,
    })
}

pub async fn results_context(
    pool: &SqlitePool,
    question_id: i64,
    now: DateTime<Utc>,
) -> AppResult<ResultsContext> {
    let DetailContext { question, choices, .. } = detail_context(pool, question_id, now).await?;
    Ok(ResultsContext { question, choices })
}

/// List the latest published polls
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let ctx = index_context(&state.pool, Utc::now(), state.config.page_size).await?;
    tracing::debug!(count = ctx.latest_question_list.len(), "rendering index");
    Ok(Html(render::index(&ctx)))
}

/// Show one poll with its voting form
pub async fn detail(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> AppResult<Html<String>> {
    let ctx = detail_context(&state.pool, parse_question_id(&question_id)?, Utc::now()).await?;
    Ok(Html(render::detail(&ctx)))
}

/// Show the vote tallies of one poll
pub async fn results(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> AppResult<Html<String>> {
    let ctx = results_context(&state.pool, parse_question_id(&question_id)?, Utc::now()).await?;
    Ok(Html(render::results(&ctx)))
}

/// Vote for a choice, then redirect to the results page
pub async fn vote(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    Form(form): Form<VoteForm>,
) -> AppResult<Response> {
    let question_id = parse_question_id(&question_id)?;
    let mut ctx = detail_context(&state.pool, question_id, Utc::now()).await?;

    let recorded = match form.choice_id() {
        Some(choice_id) => poll::vote(&state.pool, question_id, choice_id).await?,
        None => false,
    };

    if !recorded {
        tracing::info!(question_id, choice = ?form.choice, "vote without a valid choice");
        ctx.error_message = Some(NO_CHOICE_SELECTED);
        return Ok(Html(render::detail(&ctx)).into_response());
    }

    tracing::info!(question_id, "vote recorded");
    Ok(Redirect::to(&Route::Results(question_id).path()).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_segments() {
        assert_eq!(parse_question_id("42").unwrap(), 42);
        assert!(matches!(parse_question_id("abc"), Err(AppError::NotFound)));
        assert!(matches!(
            parse_question_id("99999999999999999999"),
            Err(AppError::NotFound)
        ));
        assert!(matches!(parse_question_id(""), Err(AppError::NotFound)));
    }
}
