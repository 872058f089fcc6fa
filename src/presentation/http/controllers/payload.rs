// src/presentation/http/controllers/payload.rs
use crate::domain::article::{ArticleFields, decode_flag};
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use utoipa::ToSchema;

/// Article body for create and update. Every field is optional; on update an
/// absent field keeps its stored value. `image` may be a URL or inline base64.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePayload {
    pub title_english: Option<String>,
    pub title_arabic: Option<String>,
    pub description_english: Option<String>,
    pub description_arabic: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "flexible_flag")]
    pub is_arabic: Option<bool>,
    #[serde(default, deserialize_with = "flexible_flag")]
    pub is_english: Option<bool>,
    #[serde(default, deserialize_with = "flexible_flag")]
    pub is_featured: Option<bool>,
}

/// Accepts `true`/`false` or their string spelling; `null` is absent.
fn flexible_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(value) => decode_flag(&value)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("expected a boolean, found {value}"))),
    }
}

impl From<ArticlePayload> for ArticleFields {
    fn from(payload: ArticlePayload) -> Self {
        Self {
            title_english: payload.title_english,
            title_arabic: payload.title_arabic,
            description_english: payload.description_english,
            description_arabic: payload.description_arabic,
            image: payload.image,
            date: payload.date,
            category: payload.category,
            is_arabic: payload.is_arabic,
            is_english: payload.is_english,
            is_featured: payload.is_featured,
        }
    }
}
