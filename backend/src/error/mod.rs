use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug)]
pub enum AppError {
    /// The connection pool never came up; every handler answers 503.
    ServiceUnavailable,
    NotFound(String),
    BadRequest(String),
    /// Logged server-side, callers only see a generic message.
    InternalServerError(anyhow::Error),
    /// Write-path failure; unlike `InternalServerError` the underlying
    /// detail is included in the response body.
    SaveFailed(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::ServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Database connection pool is not available.".to_string(),
                "SERVICE_UNAVAILABLE".to_string(),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND".to_string()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, "BAD_REQUEST".to_string()),
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR".to_string(),
                )
            }
            AppError::SaveFailed(err) => {
                tracing::error!("Error saving audit report: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Error saving to database: {}", err),
                    "SAVE_FAILED".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code,
        });

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Audit not found".to_string()),
            _ => AppError::InternalServerError(err.into()),
        }
    }
}
