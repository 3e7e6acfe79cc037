//! API error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use coalition::CoalitionError;
use serde::Serialize;
use thiserror::Error;

/// Error returned by every handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] CoalitionError),

    /// The request body could not be decoded.
    #[error("{1}")]
    Rejected(StatusCode, String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(err) => status_for(err),
            ApiError::Rejected(status, _) => *status,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected(rejection.status(), rejection.body_text())
    }
}

/// HTTP status for an engine error.
pub fn status_for(err: &CoalitionError) -> StatusCode {
    match err {
        CoalitionError::InvalidRange { .. }
        | CoalitionError::ConstraintConflict(_)
        | CoalitionError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        CoalitionError::DatasetNotFound(_) | CoalitionError::PartyNotFound(_) => {
            StatusCode::NOT_FOUND
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&CoalitionError::InvalidRange { min: 3, max: 1 }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&CoalitionError::ConstraintConflict("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&CoalitionError::PartyNotFound("X".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&CoalitionError::DatasetNotFound("poll".into())),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_message_is_engine_message() {
        let err = ApiError::from(CoalitionError::PartyNotFound("X".into()));
        assert_eq!(err.to_string(), CoalitionError::PartyNotFound("X".into()).to_string());
    }
}
