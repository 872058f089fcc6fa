// src/application/commands/articles/image.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        article::{ImagePayload, is_inline_payload},
        errors::DomainError,
    },
};

/// Decode an inline `image` value, or `None` when it is already a URL (or
/// anything else that is stored verbatim).
pub(super) fn inline_image(image: Option<&str>) -> ApplicationResult<Option<ImagePayload>> {
    match image {
        Some(raw) if is_inline_payload(raw) => ImagePayload::from_base64(raw)
            .map(Some)
            .map_err(invalid_image),
        _ => Ok(None),
    }
}

pub(crate) fn invalid_image(err: DomainError) -> ApplicationError {
    match err {
        DomainError::Validation(msg) => ApplicationError::validation(format!("invalid image: {msg}")),
        other => ApplicationError::from(other),
    }
}

impl ArticleCommandService {
    /// Best-effort removal of a replaced image. Failures are logged and
    /// dropped; an orphaned asset is left on the host.
    pub(super) async fn discard_image(&self, url: &str) {
        if !self.assets.is_hosted(url) {
            return;
        }
        if let Err(err) = self.assets.delete(url).await {
            tracing::warn!(image = %url, error = %err, "failed to delete previous image");
        }
    }
}
