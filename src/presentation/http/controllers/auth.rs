// src/presentation/http/controllers/auth.rs
use crate::application::{commands::auth::LoginCommand, dto::AuthTokenDto};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Admin token issued.", body = AuthTokenDto),
        (status = 401, description = "Invalid username or password.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> HttpResult<Json<AuthTokenDto>> {
    let Json(payload) = payload?;
    let command = LoginCommand {
        username: payload.username,
        password: payload.password,
    };

    state
        .services
        .auth_commands
        .login(command)
        .await
        .into_http()
        .map(Json)
}
