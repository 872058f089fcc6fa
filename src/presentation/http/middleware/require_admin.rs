// src/presentation/http/middleware/require_admin.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

/// Route layer for administrative routers. The admitted identity is stored in
/// the request extensions for the [`Authenticated`](super::super::extractors::Authenticated)
/// extractor.
pub async fn require_admin(mut req: Request<Body>, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let header = req.headers().typed_get::<Authorization<Bearer>>();
    let bearer = header.as_ref().map(Authorization::token);

    match state.services.access_gate().authorize(bearer).await {
        Ok(admin) => {
            req.extensions_mut().insert(admin);
            next.run(req).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}
