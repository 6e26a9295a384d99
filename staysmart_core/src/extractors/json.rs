//! JSON extractor that keeps rejections in the API's error shape

use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// Wrapper around `axum::Json` whose rejection is the same
/// `{"error", "status"}` body the rest of the API produces.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => {
                tracing::warn!("rejected request body: {}", rejection);
                let body = Json(json!({
                    "error": "Invalid JSON body",
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                }));
                Err((StatusCode::BAD_REQUEST, body).into_response())
            }
        }
    }
}
