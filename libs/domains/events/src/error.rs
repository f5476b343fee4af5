use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

use crate::validation::FieldViolation;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event is invalid: {} field violation(s)", .0.len())]
    Invalid(Vec<FieldViolation>),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Event not found: {0}")]
    NotFound(Uuid),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type EventResult<T> = Result<T, EventError>;

impl From<validator::ValidationErrors> for EventError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Convert EventError to AppError for standardized error responses
impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::Invalid(violations) => AppError::FieldErrors(
                serde_json::to_value(violations).unwrap_or(serde_json::Value::Null),
            ),
            EventError::Validation(msg) => AppError::BadRequest(msg),
            EventError::NotFound(id) => AppError::NotFound(format!("Event {} not found", id)),
            EventError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_status_codes() {
        let invalid = EventError::Invalid(vec![FieldViolation::wrong_value(
            "basePrice",
            "BasePrice is wrong",
            10u32,
        )]);
        assert_eq!(invalid.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = EventError::NotFound(Uuid::now_v7());
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);

        let internal = EventError::Internal("boom".to_string());
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_message_counts_violations() {
        let err = EventError::Invalid(vec![
            FieldViolation::wrong_value("basePrice", "BasePrice is wrong", 10u32),
            FieldViolation::wrong_value("maxPrice", "MaxPrice is wrong", 5u32),
        ]);
        assert_eq!(err.to_string(), "Event is invalid: 2 field violation(s)");
    }
}
