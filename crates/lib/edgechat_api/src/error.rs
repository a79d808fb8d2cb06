//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use edgechat_core::protocol::ProtocolError;
use thiserror::Error;

use crate::models::ErrorEnvelope;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
///
/// The display string is the `message` sent to the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed request or unknown operation.
    #[error("{0}")]
    BadRequest(String),

    /// A required variable was absent or blank.
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorEnvelope::single(self.to_string()))).into_response()
    }
}

impl From<ProtocolError> for AppError {
    fn from(e: ProtocolError) -> Self {
        match e {
            ProtocolError::InvalidPayload | ProtocolError::UnsupportedOperation => {
                AppError::BadRequest(e.to_string())
            }
            ProtocolError::MissingField(_) => AppError::Validation(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_errors_map_to_statuses() {
        let cases = [
            (ProtocolError::InvalidPayload, StatusCode::BAD_REQUEST, "Invalid JSON body"),
            (
                ProtocolError::UnsupportedOperation,
                StatusCode::BAD_REQUEST,
                "Unsupported operation",
            ),
            (
                ProtocolError::MissingField("text"),
                StatusCode::UNPROCESSABLE_ENTITY,
                "text is required",
            ),
        ];
        for (err, status, message) in cases {
            let app = AppError::from(err);
            assert_eq!(app.status(), status);
            assert_eq!(app.to_string(), message);
        }
    }

    #[test]
    fn into_response_uses_status() {
        let resp = AppError::Validation("question is required".into()).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
