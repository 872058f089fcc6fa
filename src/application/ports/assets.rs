// src/application/ports/assets.rs
use crate::domain::article::ImagePayload;
use async_trait::async_trait;
use thiserror::Error;

pub type AssetResult<T> = Result<T, AssetError>;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset: {0}")]
    InvalidAsset(String),
    #[error("upload failure: {0}")]
    UploadFailure(String),
}

/// External image host.
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Store the image and return its public URL.
    async fn upload(&self, image: &ImagePayload) -> AssetResult<String>;

    /// Remove a previously hosted image. Callers treat failures as advisory.
    async fn delete(&self, url: &str) -> AssetResult<()>;

    /// Whether `url` points at an asset this host manages.
    fn is_hosted(&self, url: &str) -> bool;
}
