//! Machine-readable error codes carried in every error body.
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::NotFound;
//! assert_eq!(code.as_str(), "NOT_FOUND");
//! assert_eq!(code.default_message(), "Requested resource was not found");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors
    /// Request body failed field validation
    ValidationError,

    /// Request was malformed or violated a domain rule
    BadRequest,

    /// Request body is not valid JSON
    InvalidJson,

    /// Query string could not be decoded
    InvalidQuery,

    /// Path id is not an integer
    InvalidId,

    /// Request body is not `application/json`
    UnsupportedMediaType,

    /// Requested resource was not found
    NotFound,

    /// No route handles this method on this path
    MethodNotAllowed,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// Database query failed
    DatabaseError,

    /// No pooled database connection became available in time
    DatabasePoolTimeout,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::DatabasePoolTimeout => "DATABASE_POOL_TIMEOUT",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::BadRequest => "The request could not be processed",
            ErrorCode::InvalidJson => "Invalid JSON format",
            ErrorCode::InvalidQuery => "Invalid query string",
            ErrorCode::InvalidId => "Invalid id format",
            ErrorCode::UnsupportedMediaType => "Content-Type must be application/json",
            ErrorCode::NotFound => "Requested resource was not found",
            ErrorCode::MethodNotAllowed => "The HTTP method is not allowed for this resource",
            ErrorCode::InternalError => "An unexpected error occurred",
            ErrorCode::DatabaseError => "A database error occurred",
            ErrorCode::DatabasePoolTimeout => "Database connection pool timed out",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
