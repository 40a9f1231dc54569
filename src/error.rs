// src/error.rs
use axum::response::{Html, IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::render;

#[derive(Debug, Error)]
pub enum AppError {
    /// The question does not exist or is not published yet.
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => {
                tracing::error!(error = %self, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(format!("<p>{}</p>\n", render::escape(&self.to_string())))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
