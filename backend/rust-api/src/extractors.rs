use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::handlers::ApiError;

/// JSON body extractor that answers malformed or invalid input with a JSON
/// 400 instead of axum's plain-text rejection, and runs `validator` rules.
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: serde::de::DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let message = format!("Failed to parse JSON request body: {}", rejection);
                tracing::warn!("{}", message);
                ApiError::bad_request(message).into_response()
            })?;

        value.validate().map_err(|e| {
            tracing::debug!("Request validation failed: {}", e);
            ApiError::bad_request(format!("Validation error: {}", e)).into_response()
        })?;

        Ok(ValidJson(value))
    }
}
