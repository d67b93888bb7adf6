//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use incidenthub_domain::error::{IncidentHubError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`IncidentHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(IncidentHubError);

impl From<IncidentHubError> for ApiError {
    fn from(err: IncidentHubError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            IncidentHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            IncidentHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            // Storage failures stay opaque to the caller.
            IncidentHubError::Storage(err) => {
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
