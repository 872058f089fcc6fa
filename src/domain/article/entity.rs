// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleField, ArticleId};
use std::borrow::Cow;

/// Every article attribute is optional; a `None` is never written to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
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

impl ArticleFields {
    /// Overlay the supplied fields of `patch`, keeping current values where the
    /// patch is silent.
    pub fn merge(&mut self, patch: Self) {
        let Self {
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
        } = patch;

        self.title_english = title_english.or(self.title_english.take());
        self.title_arabic = title_arabic.or(self.title_arabic.take());
        self.description_english = description_english.or(self.description_english.take());
        self.description_arabic = description_arabic.or(self.description_arabic.take());
        self.image = image.or(self.image.take());
        self.date = date.or(self.date.take());
        self.category = category.or(self.category.take());
        self.is_arabic = is_arabic.or(self.is_arabic);
        self.is_english = is_english.or(self.is_english);
        self.is_featured = is_featured.or(self.is_featured);
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Textual view of a field; flags render as `true` / `false`.
    pub fn text(&self, field: ArticleField) -> Option<Cow<'_, str>> {
        let text = match field {
            ArticleField::TitleEnglish => self.title_english.as_deref(),
            ArticleField::TitleArabic => self.title_arabic.as_deref(),
            ArticleField::DescriptionEnglish => self.description_english.as_deref(),
            ArticleField::DescriptionArabic => self.description_arabic.as_deref(),
            ArticleField::Image => self.image.as_deref(),
            ArticleField::Date => self.date.as_deref(),
            ArticleField::Category => self.category.as_deref(),
            ArticleField::IsArabic => return self.is_arabic.map(flag_text),
            ArticleField::IsEnglish => return self.is_english.map(flag_text),
            ArticleField::IsFeatured => return self.is_featured.map(flag_text),
        };
        text.map(Cow::Borrowed)
    }

    pub(crate) fn flag(&self, field: ArticleField) -> Option<bool> {
        match field {
            ArticleField::IsArabic => self.is_arabic,
            ArticleField::IsEnglish => self.is_english,
            ArticleField::IsFeatured => self.is_featured,
            _ => None,
        }
    }

    pub(crate) fn set_text(&mut self, field: ArticleField, value: String) {
        match field {
            ArticleField::TitleEnglish => self.title_english = Some(value),
            ArticleField::TitleArabic => self.title_arabic = Some(value),
            ArticleField::DescriptionEnglish => self.description_english = Some(value),
            ArticleField::DescriptionArabic => self.description_arabic = Some(value),
            ArticleField::Image => self.image = Some(value),
            ArticleField::Date => self.date = Some(value),
            ArticleField::Category => self.category = Some(value),
            ArticleField::IsArabic | ArticleField::IsEnglish | ArticleField::IsFeatured => {}
        }
    }

    pub(crate) fn set_flag(&mut self, field: ArticleField, value: bool) {
        match field {
            ArticleField::IsArabic => self.is_arabic = Some(value),
            ArticleField::IsEnglish => self.is_english = Some(value),
            ArticleField::IsFeatured => self.is_featured = Some(value),
            _ => {}
        }
    }
}

fn flag_text(value: bool) -> Cow<'static, str> {
    Cow::Borrowed(if value { "true" } else { "false" })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub fields: ArticleFields,
}

impl Article {
    pub const fn new(id: ArticleId, fields: ArticleFields) -> Self {
        Self { id, fields }
    }

    pub fn apply(&mut self, patch: ArticleFields) {
        self.fields.merge(patch);
    }
}
