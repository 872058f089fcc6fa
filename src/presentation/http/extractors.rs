// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAdmin, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// An administrator admitted by the access gate. Reuses the identity stored by
/// [`require_admin`](super::middleware::require_admin) when that middleware
/// already ran for the route.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAdmin);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(admin) = parts.extensions.get::<AuthenticatedAdmin>() {
            return Ok(Self(admin.clone()));
        }

        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let header = parts.headers.typed_get::<Authorization<Bearer>>();
        let admin = app_state
            .services
            .access_gate()
            .authorize(header.as_ref().map(Authorization::token))
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(admin))
    }
}
