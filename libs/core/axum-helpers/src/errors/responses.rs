//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "error": "An unexpected error occurred",
        "code": "INTERNAL_ERROR"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "error": "Supplier must have either an email or an address",
        "code": "BAD_REQUEST"
    })
)]
pub struct BadRequestResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "error": "Supplier with id 999 was not found",
        "code": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Unsupported Media Type - body must be application/json",
    content_type = "application/json",
    example = json!({
        "status": 415,
        "error": "Content-Type must be application/json",
        "code": "UNSUPPORTED_MEDIA_TYPE"
    })
)]
pub struct UnsupportedMediaTypeResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable - no database connection available",
    content_type = "application/json",
    example = json!({
        "status": 503,
        "error": "Database connection pool timed out",
        "code": "DATABASE_POOL_TIMEOUT"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
