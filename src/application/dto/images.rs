use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadDto {
    pub image_url: String,
    pub message: String,
}

impl ImageUploadDto {
    pub fn uploaded(image_url: String) -> Self {
        Self {
            image_url,
            message: "Image uploaded successfully".into(),
        }
    }
}
