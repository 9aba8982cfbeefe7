//! JSON body extractor that reports failures as [`AppError`].

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor.
///
/// Wraps [`axum::Json`] so that a missing `Content-Type: application/json`
/// becomes `415` and malformed JSON becomes `400`, both with the standard
/// error body.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde_json::Value;
///
/// async fn create(JsonBody(body): JsonBody<Value>) -> String {
///     body.to_string()
/// }
///
/// let app = Router::new().route("/suppliers", post(create));
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(JsonBody(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn echo(JsonBody(body): JsonBody<Value>) -> String {
        body.to_string()
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> StatusCode {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }

        Router::new()
            .route("/", post(echo))
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_valid_json_body() {
        assert_eq!(
            send(Some("application/json"), r#"{"name":"Tom"}"#).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_wrong_content_type_is_unsupported_media_type() {
        assert_eq!(
            send(Some("text/plain"), r#"{"name":"Tom"}"#).await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            send(None, r#"{"name":"Tom"}"#).await,
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(
            send(Some("application/json"), r#"{"name":"#).await,
            StatusCode::BAD_REQUEST
        );
    }
}
