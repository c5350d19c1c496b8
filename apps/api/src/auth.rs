//! Caller identity. Sessions are handled by the upstream identity provider,
//! which forwards the resolved user id in a request header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts, http::HeaderMap};

use crate::errors::AppError;

/// Header carrying the identity provider's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// A request whose caller identity was resolved upstream.
/// Extraction fails with `AppError::Unauthorized` when the header is missing or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub external_id: String,
}

impl AuthenticatedUser {
    pub fn new(external_id: impl Into<String>) -> Self {
        Self {
            external_id: external_id.into(),
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::new)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_headers(&parts.headers).ok_or(AppError::Unauthorized)
    }
}
