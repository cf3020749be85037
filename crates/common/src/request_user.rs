//! Acting-user propagation.
//!
//! Upstream components identify the caller with a plain `request_user_id`
//! header. No authentication happens here; the value is trusted as-is.

use axum::http::HeaderMap;

use crate::CoreError;

pub const REQUEST_USER_HEADER: &str = "request_user_id";

/// Extract the acting user id from request headers.
pub fn parse_request_user_id(headers: &HeaderMap) -> Result<i64, CoreError> {
    let raw = headers
        .get(REQUEST_USER_HEADER)
        .ok_or(CoreError::MissingHeader(REQUEST_USER_HEADER))?
        .to_str()
        .map_err(|e| CoreError::InvalidHeader { name: REQUEST_USER_HEADER, reason: e.to_string() })?;
    raw.trim()
        .parse::<i64>()
        .map_err(|e| CoreError::InvalidHeader { name: REQUEST_USER_HEADER, reason: e.to_string() })
}
