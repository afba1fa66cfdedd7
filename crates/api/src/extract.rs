//! Request extractors that reject with [`AppError`] instead of axum's
//! plain-text defaults.

use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection renders as an [`AppError`] payload.
///
/// A request without a `Content-Type` header is still parsed as JSON; any
/// other non-JSON content type is rejected with 415. Deserialization runs
/// before the handler, so a handler taking `AppJson<T>` only ever sees a
/// fully-typed `T`.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;
        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}
