use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("AI service not configured. Set ANTHROPIC_API_KEY in environment variables.")]
    NotConfigured,

    #[error("Input text is required")]
    InvalidInput,

    /// No JSON object could be located in the model's reply.
    #[error("Failed to parse analysis results")]
    ParseFailure,

    /// Catch-all for upstream transport/service errors and anything else
    /// unexpected. The carried message is surfaced to the caller.
    #[error("{0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::NotConfigured => (StatusCode::SERVICE_UNAVAILABLE, self.to_string()),
            AppError::InvalidInput => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::ParseFailure => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Internal(msg) => {
                let msg = if msg.is_empty() { "Analysis failed".to_string() } else { msg };
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            error!("Analysis error: {}", error_message);
        }

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
