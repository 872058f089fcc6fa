// src/infrastructure/assets/cloudinary.rs
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{
    application::ports::assets::{AssetError, AssetResult, AssetStore},
    domain::article::ImagePayload,
};

const API_BASE: &str = "https://api.cloudinary.com/v1_1";
const HOSTED_MARKER: &str = "cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub folder: String,
}

impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("folder", &self.folder)
            .finish()
    }
}

/// Signed uploads and deletions against the Cloudinary REST API.
#[derive(Clone)]
pub struct CloudinaryAssetStore {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

impl CloudinaryAssetStore {
    pub fn new(config: CloudinaryConfig) -> AssetResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| AssetError::UploadFailure(err.to_string()))?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, action: &str) -> String {
        format!("{API_BASE}/{}/image/{action}", self.config.cloud_name)
    }

    async fn post_signed(
        &self,
        action: &str,
        mut params: Vec<(&'static str, String)>,
        file: Option<String>,
    ) -> AssetResult<reqwest::Response> {
        params.push(("timestamp", Utc::now().timestamp().to_string()));
        let signature = sign(&params, &self.config.api_secret);

        let mut form = params;
        form.push(("api_key", self.config.api_key.clone()));
        form.push(("signature", signature));
        form.push(("signature_algorithm", "sha256".to_owned()));
        if let Some(file) = file {
            form.push(("file", file));
        }

        let response = self
            .client
            .post(self.endpoint(action))
            .form(&form)
            .send()
            .await
            .map_err(|err| AssetError::UploadFailure(err.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map_or_else(|_| status.to_string(), |body| body.error.message);
        if status.is_client_error() {
            Err(AssetError::InvalidAsset(message))
        } else {
            Err(AssetError::UploadFailure(message))
        }
    }
}

#[async_trait]
impl AssetStore for CloudinaryAssetStore {
    async fn upload(&self, image: &ImagePayload) -> AssetResult<String> {
        let params = vec![("folder", self.config.folder.clone())];
        let response = self
            .post_signed("upload", params, Some(image.to_data_uri()))
            .await?;
        let body: UploadResponse = response
            .json()
            .await
            .map_err(|err| AssetError::UploadFailure(err.to_string()))?;

        tracing::debug!(url = %body.secure_url, bytes = image.len(), "image hosted");
        Ok(body.secure_url)
    }

    async fn delete(&self, url: &str) -> AssetResult<()> {
        let public_id = extract_public_id(url)
            .ok_or_else(|| AssetError::InvalidAsset(format!("not a hosted image: {url}")))?;

        let response = self
            .post_signed("destroy", vec![("public_id", public_id.clone())], None)
            .await?;
        let body: DestroyResponse = response
            .json()
            .await
            .map_err(|err| AssetError::UploadFailure(err.to_string()))?;

        if body.result == "ok" {
            tracing::debug!(public_id = %public_id, "hosted image deleted");
        } else {
            tracing::warn!(public_id = %public_id, result = %body.result, "hosted image not deleted");
        }
        Ok(())
    }

    fn is_hosted(&self, url: &str) -> bool {
        url.contains(HOSTED_MARKER) && extract_public_id(url).is_some()
    }
}

/// Request signature: parameters sorted by name, joined as `k=v&k=v`, with the
/// API secret appended, hashed with SHA-256.
fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<_> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    let joined = sorted
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!("{:x}", Sha256::digest(format!("{joined}{api_secret}").as_bytes()))
}

/// Public id of a hosted asset: the path after `/upload/`, without a leading
/// version segment (`v1234/`) or the file extension.
fn extract_public_id(url: &str) -> Option<String> {
    let (_, rest) = url.split_once(UPLOAD_SEGMENT)?;
    let rest = rest.split(['?', '#']).next().unwrap_or_default();

    let rest = match rest.split_once('/') {
        Some((first, tail)) if is_version_segment(first) => tail,
        _ => rest,
    };

    let public_id = match rest.rsplit_once('.') {
        Some((stem, ext)) if !ext.contains('/') => stem,
        _ => rest,
    };

    (!public_id.is_empty()).then(|| public_id.to_owned())
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}
