//! Service index

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

pub const SERVICE_NAME: &str = "Supplier REST API Service";

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub name: &'static str,
    pub version: &'static str,
    /// Root of the supplier resource
    pub paths: &'static str,
}

/// Service name, version and where the supplier resource lives
#[utoipa::path(
    get,
    path = "/",
    tag = "service",
    responses(
        (status = 200, description = "Service information", body = IndexResponse)
    )
)]
pub async fn index(State(app): State<AppInfo>) -> Json<IndexResponse> {
    Json(IndexResponse {
        name: SERVICE_NAME,
        version: app.version,
        paths: "/suppliers",
    })
}

pub fn router(app_info: AppInfo) -> Router {
    Router::new().route("/", get(index)).with_state(app_info)
}
