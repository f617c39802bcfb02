//! HTTP error response mapping.
//!
//! Client mistakes (bad input, malformed or unknown ids) come back as 400/404
//! carrying the domain error's own message; storage failures are logged here
//! and hidden behind a generic 500 so backend details never reach the client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hearth_domain::error::{HearthError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`HearthError`] to an HTTP response with appropriate status code.
pub struct ApiError(HearthError);

impl ApiError {
    /// Error for a path id that failed to parse.
    ///
    /// Handlers hit this before any service call, so it gets a constructor
    /// of its own instead of each handler assembling the validation error.
    #[must_use]
    pub fn invalid_id(raw: String) -> Self {
        Self(ValidationError::InvalidId(raw).into())
    }
}

impl From<HearthError> for ApiError {
    fn from(err: HearthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            HearthError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            HearthError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HearthError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_domain::error::{NotFoundError, StorageError};

    fn status_of(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn should_map_malformed_id_to_bad_request() {
        let err = ApiError::invalid_id("not-a-uuid".to_string());
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_validation_error_to_bad_request() {
        let err = ApiError::from(HearthError::Validation(ValidationError::EmptyComplaint));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = ApiError::from(HearthError::NotFound(NotFoundError {
            entity: "Ticket",
            id: "abc".to_string(),
        }));
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_hide_storage_failures_behind_500() {
        let err = ApiError::from(HearthError::Storage(StorageError {
            message: "connection reset".to_string(),
        }));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
