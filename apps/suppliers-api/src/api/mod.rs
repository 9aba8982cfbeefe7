//! API routes module

pub mod health;
pub mod index;
pub mod suppliers;

use axum::{Router, routing::get};
use axum_helpers::server::{create_router, health_router};
use std::io;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/suppliers", suppliers::router(state))
        .merge(index::router(state.config.app.clone()))
        .merge(health_router(state.config.app.clone()))
        .merge(ready_router(state.clone()))
}

/// Router with the /ready endpoint, state applied
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Routes plus docs and middleware, ready to serve
pub fn app(state: &AppState) -> io::Result<Router> {
    create_router::<ApiDoc>(routes(state), &state.config.server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn memory_app() -> Router {
        let state = AppState {
            config: Config::in_memory(),
            db: None,
        };
        app(&state).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_index_reports_service() {
        let app = memory_app();

        let (status, body) = send(&app, get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Supplier REST API Service");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["paths"], "/suppliers");
    }

    #[tokio::test]
    async fn test_supplier_lifecycle_under_suppliers_prefix() {
        let app = memory_app();

        let request = Request::builder()
            .method("POST")
            .uri("/suppliers")
            .header("content-type", "application/json")
            .body(Body::from(
                json!({"name": "Tom", "email": "t@x.com", "products": [3, 1, 2]}).to_string(),
            ))
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["products"], json!([1, 2, 3]));

        let (status, body) = send(&app, get("/suppliers/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Tom");

        let (status, body) = send(&app, get("/suppliers?products=1,3")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["1"]["email"], "t@x.com");

        let (status, body) = send(&app, get("/suppliers/999")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], 404);
    }

    #[tokio::test]
    async fn test_unknown_route_uses_error_body() {
        let app = memory_app();

        let (status, body) = send(&app, get("/nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_health_and_ready_in_memory() {
        let app = memory_app();

        let (status, body) = send(&app, get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, get("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["storage"], "connected");
    }

    #[tokio::test]
    async fn test_ready_reports_database_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let state = AppState {
            config: Config::in_memory(),
            db: Some(db),
        };

        let (status, body) = send(&ready_router(state), get("/ready")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}
