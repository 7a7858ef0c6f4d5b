//! Request extractors.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use pinboard_common::AppError;

/// JSON body extractor that reports rejections in the API's error shape.
///
/// Axum's own `Json` rejection is plain text; wrapping it here turns a
/// missing or mistyped field into an [`AppError::Validation`], which
/// serializes as `{"detail": ...}` with status 422. The rejection fires
/// before the handler body runs, so a failed extraction never mutates
/// the store.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}
