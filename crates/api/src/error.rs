use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pl_models::StatsError;
use serde::Serialize;
use tracing::error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// HTTP face of [`StatsError`].
#[derive(Debug)]
pub struct ApiError(pub StatsError);

impl From<StatsError> for ApiError {
    fn from(e: StatsError) -> Self {
        Self(e)
    }
}

// Malformed query strings and bodies get the same JSON error shape as everything else
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(StatsError::Validation(rejection.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(StatsError::Validation(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            StatsError::NotFound { .. } => StatusCode::NOT_FOUND,
            StatsError::Validation(_) => StatusCode::BAD_REQUEST,
            StatsError::Ingestion { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            StatsError::Serialization(_) | StatsError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}
