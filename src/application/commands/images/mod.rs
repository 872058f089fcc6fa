// src/application/commands/images/mod.rs
use std::sync::Arc;

use bytes::Bytes;

use crate::{
    application::{
        commands::articles::invalid_image,
        dto::{AuthenticatedAdmin, ImageUploadDto},
        error::ApplicationResult,
        ports::assets::AssetStore,
    },
    domain::article::ImagePayload,
};

/// Standalone image uploads, independent of any article.
pub struct ImageCommandService {
    assets: Arc<dyn AssetStore>,
}

impl ImageCommandService {
    pub fn new(assets: Arc<dyn AssetStore>) -> Self {
        Self { assets }
    }

    pub async fn upload_base64(
        &self,
        actor: &AuthenticatedAdmin,
        encoded: &str,
    ) -> ApplicationResult<ImageUploadDto> {
        let payload = ImagePayload::from_base64(encoded).map_err(invalid_image)?;
        self.store(actor, &payload).await
    }

    pub async fn upload_file(
        &self,
        actor: &AuthenticatedAdmin,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> ApplicationResult<ImageUploadDto> {
        let payload = ImagePayload::from_upload(bytes, content_type).map_err(invalid_image)?;
        self.store(actor, &payload).await
    }

    async fn store(
        &self,
        actor: &AuthenticatedAdmin,
        payload: &ImagePayload,
    ) -> ApplicationResult<ImageUploadDto> {
        let url = self.assets.upload(payload).await?;
        tracing::info!(
            admin = %actor.username,
            content_type = payload.content_type(),
            bytes = payload.len(),
            "image uploaded"
        );
        Ok(ImageUploadDto::uploaded(url))
    }
}
