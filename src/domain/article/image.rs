// src/domain/article/image.rs
use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use bytes::Bytes;

pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

const DATA_URI_IMAGE_PREFIX: &str = "data:image/";
const INLINE_LENGTH_THRESHOLD: usize = 100;

/// Whether an incoming `image` value is raw upload content rather than an
/// already hosted URL: an image data URI, or a long value that is not a URL.
pub fn is_inline_payload(image: &str) -> bool {
    image.starts_with(DATA_URI_IMAGE_PREFIX)
        || (image.len() > INLINE_LENGTH_THRESHOLD && !image.starts_with("http"))
}

/// Validated image bytes ready to hand to the asset host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Bytes,
    content_type: &'static str,
}

impl ImagePayload {
    /// Accepts plain base64 or a `data:` URI.
    pub fn from_base64(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DomainError::Validation("base64 image is empty".into()));
        }

        let encoded = if raw.starts_with("data:") {
            raw.split_once(',')
                .map(|(_, data)| data)
                .ok_or_else(|| DomainError::Validation("malformed data URI".into()))?
        } else {
            raw
        };

        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let decoded = STANDARD
            .decode(compact.as_bytes())
            .map_err(|err| DomainError::Validation(format!("image is not valid base64: {err}")))?;

        Self::from_bytes(Bytes::from(decoded))
    }

    /// Binary upload with the client-declared content type.
    pub fn from_upload(bytes: Bytes, declared_content_type: Option<&str>) -> DomainResult<Self> {
        if bytes.is_empty() {
            return Err(DomainError::Validation("file is empty".into()));
        }
        let declared_image = declared_content_type.is_some_and(|ct| ct.starts_with("image/"));
        if !declared_image {
            return Err(DomainError::Validation("file must be an image".into()));
        }
        Self::from_bytes(bytes)
    }

    fn from_bytes(bytes: Bytes) -> DomainResult<Self> {
        if bytes.is_empty() {
            return Err(DomainError::Validation("image is empty".into()));
        }
        if bytes.len() > MAX_IMAGE_BYTES {
            return Err(DomainError::Validation(
                "image size exceeds 10MB limit".into(),
            ));
        }
        let content_type = sniff_content_type(&bytes)
            .ok_or_else(|| DomainError::Validation("unrecognised image format".into()))?;
        Ok(Self {
            bytes,
            content_type,
        })
    }

    pub const fn content_type(&self) -> &'static str {
        self.content_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.content_type,
            STANDARD.encode(&self.bytes)
        )
    }
}

fn sniff_content_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") {
        Some("image/bmp")
    } else {
        None
    }
}
