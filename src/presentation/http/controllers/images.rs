// src/presentation/http/controllers/images.rs
use crate::application::dto::ImageUploadDto;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

const FILE_FIELD: &str = "file";

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Base64ImageRequest {
    /// Plain base64 or a `data:image/...;base64,` URI.
    pub base64_image: String,
}

/// Multipart form carrying the image in its `file` part.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/images/upload",
    request_body(content = ImageUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image hosted.", body = ImageUploadDto),
        (status = 400, description = "Missing, oversized or non-image file.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Images"
)]
pub async fn upload_file(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    mut multipart: Multipart,
) -> HttpResult<(StatusCode, Json<ImageUploadDto>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::bad_request(err.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|err| HttpError::bad_request(err.body_text()))?;

        return state
            .services
            .image_commands
            .upload_file(&admin, bytes, content_type.as_deref())
            .await
            .into_http()
            .map(|uploaded| (StatusCode::CREATED, Json(uploaded)));
    }

    Err(HttpError::bad_request("multipart field `file` is required"))
}

#[utoipa::path(
    post,
    path = "/api/images/upload-base64",
    request_body = Base64ImageRequest,
    responses(
        (status = 201, description = "Image hosted.", body = ImageUploadDto),
        (status = 400, description = "Malformed base64 or unrecognised image.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Images"
)]
pub async fn upload_base64(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    payload: Result<Json<Base64ImageRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ImageUploadDto>)> {
    let Json(payload) = payload?;

    state
        .services
        .image_commands
        .upload_base64(&admin, &payload.base64_image)
        .await
        .into_http()
        .map(|uploaded| (StatusCode::CREATED, Json(uploaded)))
}
