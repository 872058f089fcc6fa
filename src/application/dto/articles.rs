use crate::domain::article::{Article, ArticleFields};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: String,
    pub title_english: Option<String>,
    pub title_arabic: Option<String>,
    pub description_english: Option<String>,
    pub description_arabic: Option<String>,
    pub image: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
    pub is_arabic: Option<bool>,
    pub is_english: Option<bool>,
    pub is_featured: Option<bool>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        let ArticleFields {
            title_english,
            title_arabic,
            description_english,
            description_arabic,
            image,
            date,
            category,
            is_arabic,
            is_english,
            is_featured,
        } = article.fields;

        Self {
            id: article.id.into(),
            title_english,
            title_arabic,
            description_english,
            description_arabic,
            image,
            date,
            category,
            is_arabic,
            is_english,
            is_featured,
        }
    }
}
