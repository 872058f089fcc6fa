use crate::domain::errors::{DomainError, DomainResult};
use std::{collections::BTreeMap, fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("article id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Category restriction of a listing. `"all"` (any case), blank, or a missing
/// category all mean no restriction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(String),
}

impl CategoryScope {
    pub const ALL_SENTINEL: &'static str = "all";

    pub fn from_param(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            None => Self::All,
            Some(value) if value.is_empty() || value.eq_ignore_ascii_case(Self::ALL_SENTINEL) => {
                Self::All
            }
            Some(value) => Self::Only(value.to_string()),
        }
    }

    pub fn category(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

/// Trimmed, lower-cased, non-empty free-text search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ArticleField {
    TitleEnglish,
    TitleArabic,
    DescriptionEnglish,
    DescriptionArabic,
    Image,
    Date,
    Category,
    IsArabic,
    IsEnglish,
    IsFeatured,
}

impl ArticleField {
    pub const ALL: [Self; 10] = [
        Self::TitleEnglish,
        Self::TitleArabic,
        Self::DescriptionEnglish,
        Self::DescriptionArabic,
        Self::Image,
        Self::Date,
        Self::Category,
        Self::IsArabic,
        Self::IsEnglish,
        Self::IsFeatured,
    ];

    /// Fields consulted by free-text search.
    pub const SEARCHABLE: [Self; 6] = [
        Self::TitleEnglish,
        Self::TitleArabic,
        Self::DescriptionEnglish,
        Self::DescriptionArabic,
        Self::Category,
        Self::Date,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TitleEnglish => "titleEnglish",
            Self::TitleArabic => "titleArabic",
            Self::DescriptionEnglish => "descriptionEnglish",
            Self::DescriptionArabic => "descriptionArabic",
            Self::Image => "image",
            Self::Date => "date",
            Self::Category => "category",
            Self::IsArabic => "isArabic",
            Self::IsEnglish => "isEnglish",
            Self::IsFeatured => "isFeatured",
        }
    }

    pub const fn is_flag(self) -> bool {
        matches!(self, Self::IsArabic | Self::IsEnglish | Self::IsFeatured)
    }
}

impl fmt::Display for ArticleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArticleField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown article field: {s}")))
    }
}

/// Per-field equality constraints evaluated after retrieval.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactFilters(BTreeMap<ArticleField, String>);

impl ExactFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag values are compared in their canonical `true`/`false` form.
    pub fn insert(&mut self, field: ArticleField, expected: impl Into<String>) {
        let expected = expected.into();
        let expected = if field.is_flag() {
            expected.trim().to_ascii_lowercase()
        } else {
            expected
        };
        self.0.insert(field, expected);
    }

    pub fn with(mut self, field: ArticleField, expected: impl Into<String>) -> Self {
        self.insert(field, expected);
        self
    }

    pub fn get(&self, field: ArticleField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArticleField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<(String, String)>> for ExactFilters {
    type Error = DomainError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut filters = Self::new();
        for (name, value) in pairs {
            filters.insert(name.parse()?, value);
        }
        Ok(filters)
    }
}
