use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::{types::ErrorBody, CoreError};
use models::errors::ModelError;
use service::errors::ServiceError;
use tracing::error;

/// Error returned by handlers, rendered as `{"error": ..., "message": ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.error, message = ?self.message, "request failed");
        }
        let body = ErrorBody { error: self.error.to_string(), message: self.message };
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let msg = Some(e.to_string());
        match e {
            ServiceError::Validation(_) | ServiceError::Model(ModelError::Validation(_)) => {
                Self::new(StatusCode::BAD_REQUEST, "Validation Error", msg)
            }
            ServiceError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, "Not Found", msg),
            ServiceError::Model(ModelError::Db(_)) => Self::new(StatusCode::INTERNAL_SERVER_ERROR, "DB Error", msg),
            ServiceError::Io(_) | ServiceError::Parse(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", msg)
            }
        }
    }
}

impl From<CoreError> for JsonApiError {
    fn from(e: CoreError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Bad Request", Some(e.to_string()))
    }
}
