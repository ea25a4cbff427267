//! Error handling for the application

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use crate::pricing::responses::BudgetErrorResponse;
use crate::pricing::ValidationError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot {method} {path}")]
    RouteNotFound { method: Method, path: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation(err) => {
                tracing::debug!("rejected request: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(BudgetErrorResponse {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            AppError::RouteNotFound { .. } => {
                // Express-style body: "Cannot POST /"
                (StatusCode::NOT_FOUND, self.to_string()).into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
