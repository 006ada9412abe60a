//! Gateway error handling.
//!
//! Only transport-level failures surface as HTTP errors; everything the user
//! can cause from inside the chat (unknown commands, malformed payloads,
//! missing items) is absorbed by the engine and answered as a notice with
//! status 200. All route handlers return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the gateway.
#[derive(Debug, Error)]
pub enum AppError {
    /// The webhook call did not present the configured gateway token.
    #[error("Unauthorized")]
    Unauthorized,

    /// The update body is structurally unusable.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        if matches!(self, Self::Unauthorized) {
            tracing::warn!("webhook call rejected: bad or missing gateway token");
        }

        (status, self.to_string()).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
