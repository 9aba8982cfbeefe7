//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Suppliers API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Supplier REST API Service",
        version = "0.1.0",
        description = "Supplier management: contact details and supplied product ids",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::index::index),
    nest(
        (path = "/suppliers", api = domain_suppliers::handlers::ApiDoc)
    ),
    tags(
        (name = "service", description = "Service information")
    )
)]
pub struct ApiDoc;
