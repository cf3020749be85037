use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::{request::Parts, StatusCode},
};
use common::request_user::parse_request_user_id;
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;

/// Acting user id carried by the `request_user_id` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RequestUser
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parse_request_user_id(&parts.headers)?))
    }
}

/// `Path` whose rejection renders as a JSON error body.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

impl From<PathRejection> for JsonApiError {
    fn from(e: PathRejection) -> Self {
        let status = match e.status() {
            s if s.is_server_error() => s,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(status, "Bad Request", Some(e.body_text()))
    }
}
