use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use common::types::ResponseBody;
use models::errors::ModelError;
use service::errors::ServiceError;

/// Transport-boundary error carrying the status code to emit. Client errors
/// render a `fail` envelope, everything else an `error` envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => Self::new(StatusCode::BAD_REQUEST, msg),
            ServiceError::Model(ModelError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            other => {
                error!(err = %other, "service failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = if self.status.is_client_error() {
            ResponseBody::fail(self.message)
        } else {
            ResponseBody::error(self.message)
        };
        (self.status, Json(body)).into_response()
    }
}
