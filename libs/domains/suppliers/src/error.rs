use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("At least one contact method (email or address) is required")]
    MissingContactInfo,

    #[error("{0}")]
    MissingInfo(String),

    #[error("<{expected}> expected for {field}, got <{found}>")]
    WrongType {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("{field} is not within range (0, {max}), got {value}")]
    OutOfRange {
        field: &'static str,
        max: &'static str,
        value: String,
    },

    #[error("User cannot set the value of id")]
    UserSuppliedId,

    #[error("Products {0:?} already belong to this supplier")]
    DuplicateProduct(Vec<i64>),

    #[error("At least one product id is required")]
    MissingProductId,

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Supplier with id {0} was not found")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type SupplierResult<T> = Result<T, SupplierError>;

/// Convert SupplierError to AppError for standardized error responses
impl From<SupplierError> for AppError {
    fn from(err: SupplierError) -> Self {
        match err {
            SupplierError::NotFound(id) => {
                AppError::NotFound(format!("Supplier with id {} was not found", id))
            }
            SupplierError::Validation(errors) => AppError::ValidationError(errors),
            SupplierError::Database(e) => AppError::Database(e),
            SupplierError::Internal(msg) => AppError::InternalServerError(msg),
            other => AppError::BadRequest(other.to_string()),
        }
    }
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
