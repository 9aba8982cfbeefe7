use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AppError, IdPath, JsonBody,
    errors::responses::{
        BadRequestResponse, InternalServerErrorResponse, NotFoundResponse,
        ServiceUnavailableResponse, UnsupportedMediaTypeResponse,
    },
    method_not_allowed,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    AddProducts, CreateSupplier, DeletedSupplier, Supplier, SupplierFilter, UpdateSupplier,
};
use crate::repository::SupplierRepository;
use crate::service::SupplierService;

pub const TAG: &str = "suppliers";

/// OpenAPI documentation for Suppliers API
#[derive(OpenApi)]
#[openapi(
    paths(
        find_suppliers,
        create_supplier,
        get_supplier,
        update_supplier,
        add_products,
        delete_supplier,
    ),
    components(
        schemas(Supplier, CreateSupplier, UpdateSupplier, AddProducts, DeletedSupplier),
        responses(
            NotFoundResponse,
            BadRequestResponse,
            UnsupportedMediaTypeResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Supplier management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the supplier router with all HTTP endpoints
pub fn router<R: SupplierRepository + 'static>(service: SupplierService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(find_suppliers).post(create_supplier))
        .route(
            "/{id}",
            get(get_supplier)
                .put(update_supplier)
                .post(update_supplier)
                .delete(delete_supplier),
        )
        .route("/{id}/products", post(add_products))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

/// Find suppliers by attribute, or list all of them
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(SupplierFilter),
    responses(
        (status = 200, description = "Suppliers keyed by id", body = BTreeMap<String, Supplier>),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn find_suppliers<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    filter: Result<Query<SupplierFilter>, QueryRejection>,
) -> Result<Json<BTreeMap<i64, Supplier>>, AppError> {
    let Query(filter) = filter?;

    let suppliers = service.find_suppliers(filter).await?;
    Ok(Json(suppliers.into_iter().map(|s| (s.id(), s)).collect()))
}

/// Create a new supplier
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateSupplier,
    responses(
        (status = 201, description = "Supplier created successfully", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    JsonBody(body): JsonBody<Value>,
) -> Result<impl IntoResponse, AppError> {
    let input = CreateSupplier::from_value(body)?;
    let supplier = service.create_supplier(input).await?;

    Ok((StatusCode::CREATED, Json(supplier)))
}

/// Get a supplier by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<Supplier>, AppError> {
    let supplier = service.get_supplier(id).await?;
    Ok(Json(supplier))
}

/// Update a supplier (also served on POST)
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    request_body = UpdateSupplier,
    responses(
        (status = 200, description = "Supplier updated successfully", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<Supplier>, AppError> {
    let update = UpdateSupplier::from_value(body)?;
    let supplier = service.update_supplier(id, update).await?;
    Ok(Json(supplier))
}

/// Attach products to a supplier
#[utoipa::path(
    post,
    path = "/{id}/products",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    request_body = AddProducts,
    responses(
        (status = 200, description = "Products added", body = Supplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 415, response = UnsupportedMediaTypeResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn add_products<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<Supplier>, AppError> {
    let input = AddProducts::from_value(body)?;
    let supplier = service.add_products(id, input).await?;
    Ok(Json(supplier))
}

/// Delete a supplier
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Supplier ID")
    ),
    responses(
        (status = 200, description = "Supplier deleted successfully", body = DeletedSupplier),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedSupplier>, AppError> {
    service.delete_supplier(id).await?;
    Ok(Json(DeletedSupplier { id }))
}
