pub mod codes;
pub mod handlers;
pub mod responses;

pub use codes::ErrorCode;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// ```json
/// {
///   "status": 404,
///   "error": "Supplier with id 999 was not found",
///   "code": "NOT_FOUND"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error identifier
    pub code: ErrorCode,
    /// Optional structured error details (e.g., validation field errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, code: ErrorCode, error: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: error.into(),
            code,
            details: None,
        }
    }
}

/// Application error type that can be converted to HTTP responses.
///
/// Every failure leaving a handler goes through this type, so it is the only
/// place that decides status codes and the error body.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Query extraction error: {0}")]
    QueryRejection(#[from] QueryRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl AppError {
    /// Status, code, message and details for this error; logs at a level
    /// matching who is at fault.
    fn parts(self) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
        match self {
            AppError::Database(e) => map_db_error(e),
            AppError::JsonExtractorRejection(e) => {
                tracing::info!(error_code = %ErrorCode::InvalidJson, "JSON extraction error: {}", e);
                match e {
                    JsonRejection::MissingJsonContentType(_) => (
                        StatusCode::UNSUPPORTED_MEDIA_TYPE,
                        ErrorCode::UnsupportedMediaType,
                        ErrorCode::UnsupportedMediaType.default_message().to_string(),
                        None,
                    ),
                    other => (
                        StatusCode::BAD_REQUEST,
                        ErrorCode::InvalidJson,
                        other.body_text(),
                        None,
                    ),
                }
            }
            AppError::QueryRejection(e) => {
                tracing::info!(error_code = %ErrorCode::InvalidQuery, "Query extraction error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::InvalidQuery,
                    e.body_text(),
                    None,
                )
            }
            AppError::ValidationError(e) => {
                tracing::info!(error_code = %ErrorCode::ValidationError, "Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    e.to_string(),
                    serde_json::to_value(&e).ok(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::info!(error_code = %ErrorCode::BadRequest, "Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::BadRequest, msg, None)
            }
            AppError::InvalidId(msg) => {
                tracing::info!(error_code = %ErrorCode::InvalidId, "Invalid id: {}", msg);
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidId, msg, None)
            }
            AppError::NotFound(msg) => {
                tracing::info!(error_code = %ErrorCode::NotFound, "Not found: {}", msg);
                (StatusCode::NOT_FOUND, ErrorCode::NotFound, msg, None)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!(error_code = %ErrorCode::InternalError, "Internal server error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    // Internal details stay in the logs
                    ErrorCode::InternalError.default_message().to_string(),
                    None,
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = self.parts();

        let body = ErrorResponse {
            details,
            ..ErrorResponse::new(status, code, message)
        };

        (status, Json(body)).into_response()
    }
}

/// Maps SeaORM errors to response components
fn map_db_error(error: DbErr) -> (StatusCode, ErrorCode, String, Option<serde_json::Value>) {
    match error {
        DbErr::RecordNotFound(msg) => {
            tracing::info!(error_code = %ErrorCode::NotFound, "Database record not found: {}", msg);
            (
                StatusCode::NOT_FOUND,
                ErrorCode::NotFound,
                ErrorCode::NotFound.default_message().to_string(),
                None,
            )
        }
        DbErr::RecordNotUpdated => {
            tracing::info!(error_code = %ErrorCode::NotFound, "Database record not updated");
            (
                StatusCode::NOT_FOUND,
                ErrorCode::NotFound,
                ErrorCode::NotFound.default_message().to_string(),
                None,
            )
        }
        DbErr::ConnectionAcquire(e) => {
            tracing::warn!(error_code = %ErrorCode::DatabasePoolTimeout, "Database connection acquire failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::DatabasePoolTimeout,
                ErrorCode::DatabasePoolTimeout.default_message().to_string(),
                None,
            )
        }
        other => {
            tracing::error!(error_code = %ErrorCode::DatabaseError, "Database error: {:?}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::DatabaseError,
                ErrorCode::DatabaseError.default_message().to_string(),
                None,
            )
        }
    }
}

/// Build an error response outside of the `AppError` flow.
///
/// ```rust,ignore
/// use axum_helpers::errors::{error_response, ErrorCode};
/// use axum::http::StatusCode;
///
/// let response = error_response(StatusCode::NOT_FOUND, ErrorCode::NotFound, "no such route");
/// ```
pub fn error_response(status: StatusCode, code: ErrorCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(status, code, message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use sea_orm::ConnAcquireErr;

    async fn body_of(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let err = AppError::NotFound("Supplier with id 9 was not found".into());
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Supplier with id 9 was not found");
        assert_eq!(body["code"], "NOT_FOUND");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_bad_request_body() {
        let err = AppError::BadRequest("User cannot set the value of id".into());
        let (status, body) = body_of(err).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], 400);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let (status, body) = body_of(AppError::InternalServerError("pool exploded".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], ErrorCode::InternalError.default_message());
    }

    #[tokio::test]
    async fn test_db_error_mapping() {
        let err = AppError::Database(DbErr::RecordNotFound("suppliers".into()));
        let (status, _) = body_of(err).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let err = AppError::Database(DbErr::ConnectionAcquire(ConnAcquireErr::Timeout));
        let (status, body) = body_of(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["code"], "DATABASE_POOL_TIMEOUT");

        let (status, body) = body_of(AppError::Database(DbErr::Custom("boom".into()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_validation_error_has_details() {
        let mut errors = ValidationErrors::new();
        errors.add("name", validator::ValidationError::new("length"));

        let (status, body) = body_of(AppError::ValidationError(errors)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["details"]["name"].is_array());
    }
}
