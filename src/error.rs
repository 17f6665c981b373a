use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Upstream news API unreachable: {0}")]
    UpstreamUnreachable(String),

    #[error("Could not build upstream request URL: {0}")]
    InvalidRequestUrl(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UpstreamUnreachable(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidRequestUrl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            AppError::UpstreamUnreachable(_) => tracing::warn!("{}", self),
            _ => tracing::error!("{}", self),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest includes the full URL in its message; the token must not leak.
        AppError::UpstreamUnreachable(err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
