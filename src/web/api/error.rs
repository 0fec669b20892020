use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::position::ResolveError;
use crate::refresh::RefreshError;

pub enum ApiError {
    NotFound(u32),
    InvalidTle(String),
    MissingCoordinates(u32),
    Propagation(String),
    Fetch(String),
    Storage(String),
}

impl From<ResolveError> for ApiError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(satid) => ApiError::NotFound(satid),
            ResolveError::InvalidTle(e) => ApiError::InvalidTle(e.to_string()),
            ResolveError::Propagation(e) => ApiError::Propagation(e.to_string()),
            ResolveError::MissingCoordinates(satid) => ApiError::MissingCoordinates(satid),
            ResolveError::Store(e) => ApiError::Storage(e.to_string()),
        }
    }
}

impl From<RefreshError> for ApiError {
    fn from(e: RefreshError) -> Self {
        match e {
            e @ (RefreshError::Fetch(_) | RefreshError::Timeout(_)) => {
                ApiError::Fetch(e.to_string())
            }
            RefreshError::InvalidTle(e) => ApiError::InvalidTle(e.to_string()),
            RefreshError::Resolve(e) => e.into(),
            RefreshError::Store(e) => ApiError::Storage(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NotFound(satid) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::with_message(
                    "satellite_not_found",
                    &format!("no satellite with id {}", satid),
                ),
            ),
            ApiError::InvalidTle(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_message("invalid_tle", &msg),
            ),
            ApiError::MissingCoordinates(satid) => (
                StatusCode::CONFLICT,
                ErrorResponse::with_message(
                    "missing_coordinates",
                    &format!("satellite {} has no resolved position", satid),
                ),
            ),
            ApiError::Propagation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::with_message("propagation_failed", &msg),
            ),
            ApiError::Fetch(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::with_message("catalog_fetch_failed", &msg),
            ),
            ApiError::Storage(msg) => {
                log::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_message("storage_error", &msg),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn with_message(error: &str, message: &str) -> Self {
        ErrorResponse {
            error: error.to_string(),
            message: Some(message.to_string()),
        }
    }
}
