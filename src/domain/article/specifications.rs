use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleField, ExactFilters, SearchTerm};

pub trait ArticleSpecification {
    fn is_satisfied_by(&self, article: &Article) -> bool;
}

/// Case-insensitive substring match over the searchable text fields.
pub struct MatchesSearchTerm<'a> {
    term: &'a SearchTerm,
}

impl<'a> MatchesSearchTerm<'a> {
    pub const fn new(term: &'a SearchTerm) -> Self {
        Self { term }
    }
}

impl ArticleSpecification for MatchesSearchTerm<'_> {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        let needle = self.term.as_str();
        ArticleField::SEARCHABLE.iter().any(|field| {
            article
                .fields
                .text(*field)
                .is_some_and(|value| value.to_lowercase().contains(needle))
        })
    }
}

/// Every supplied field must be present and equal; unsupplied fields are free.
pub struct MatchesExactFields<'a> {
    filters: &'a ExactFilters,
}

impl<'a> MatchesExactFields<'a> {
    pub const fn new(filters: &'a ExactFilters) -> Self {
        Self { filters }
    }
}

impl ArticleSpecification for MatchesExactFields<'_> {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        self.filters.iter().all(|(field, expected)| {
            article
                .fields
                .text(field)
                .is_some_and(|value| value == expected)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleFields, ArticleId};

    fn article(fields: ArticleFields) -> Article {
        Article::new(ArticleId::new("a1").unwrap(), fields)
    }

    fn term(raw: &str) -> SearchTerm {
        SearchTerm::parse(Some(raw)).unwrap()
    }

    #[test]
    fn search_matches_substring_case_insensitively() {
        let sports = article(ArticleFields {
            category: Some("Sports".into()),
            ..ArticleFields::default()
        });
        assert!(MatchesSearchTerm::new(&term("spor")).is_satisfied_by(&sports));
        assert!(MatchesSearchTerm::new(&term("SPORTS")).is_satisfied_by(&sports));
        assert!(!MatchesSearchTerm::new(&term("politics")).is_satisfied_by(&sports));
    }

    #[test]
    fn search_covers_every_searchable_field() {
        let cases = [
            ArticleFields {
                title_english: Some("Rain Today".into()),
                ..ArticleFields::default()
            },
            ArticleFields {
                title_arabic: Some("مطر rain".into()),
                ..ArticleFields::default()
            },
            ArticleFields {
                description_english: Some("Heavy RAIN expected".into()),
                ..ArticleFields::default()
            },
            ArticleFields {
                description_arabic: Some("brainstorm".into()),
                ..ArticleFields::default()
            },
            ArticleFields {
                category: Some("Rainfall".into()),
                ..ArticleFields::default()
            },
            ArticleFields {
                date: Some("rainy-season-2024".into()),
                ..ArticleFields::default()
            },
        ];

        let rain = term("rain");
        for fields in cases {
            assert!(MatchesSearchTerm::new(&rain).is_satisfied_by(&article(fields)));
        }
    }

    #[test]
    fn search_matches_arabic_text() {
        let arabic = article(ArticleFields {
            title_arabic: Some("أخبار الرياضة".into()),
            ..ArticleFields::default()
        });
        assert!(MatchesSearchTerm::new(&term("الرياضة")).is_satisfied_by(&arabic));
    }

    #[test]
    fn search_ignores_image_and_flags() {
        let candidate = article(ArticleFields {
            image: Some("https://cdn.example.com/rain.png".into()),
            is_featured: Some(true),
            ..ArticleFields::default()
        });
        assert!(!MatchesSearchTerm::new(&term("rain")).is_satisfied_by(&candidate));
        assert!(!MatchesSearchTerm::new(&term("true")).is_satisfied_by(&candidate));
    }

    #[test]
    fn article_without_text_never_matches() {
        let empty = article(ArticleFields::default());
        for raw in ["a", "rain", "2024", " x "] {
            assert!(!MatchesSearchTerm::new(&term(raw)).is_satisfied_by(&empty));
        }
    }

    #[test]
    fn exact_match_requires_equality() {
        let technology = article(ArticleFields {
            category: Some("Technology".into()),
            ..ArticleFields::default()
        });
        let tech_filter = ExactFilters::new().with(ArticleField::Category, "Tech");

        assert!(!MatchesExactFields::new(&tech_filter).is_satisfied_by(&technology));
        assert!(MatchesSearchTerm::new(&term("Tech")).is_satisfied_by(&technology));

        let exact = ExactFilters::new().with(ArticleField::Category, "Technology");
        assert!(MatchesExactFields::new(&exact).is_satisfied_by(&technology));
    }

    #[test]
    fn exact_match_is_case_sensitive_for_text() {
        let world = article(ArticleFields {
            category: Some("World".into()),
            ..ArticleFields::default()
        });
        let filter = ExactFilters::new().with(ArticleField::Category, "world");
        assert!(!MatchesExactFields::new(&filter).is_satisfied_by(&world));
    }

    #[test]
    fn exact_match_treats_missing_field_as_mismatch() {
        let untitled = article(ArticleFields {
            category: Some("World".into()),
            ..ArticleFields::default()
        });
        let filter = ExactFilters::new()
            .with(ArticleField::Category, "World")
            .with(ArticleField::TitleEnglish, "Rain Today");
        assert!(!MatchesExactFields::new(&filter).is_satisfied_by(&untitled));
    }

    #[test]
    fn exact_match_compares_flags_as_text() {
        let featured = article(ArticleFields {
            is_featured: Some(true),
            ..ArticleFields::default()
        });
        let yes = ExactFilters::new().with(ArticleField::IsFeatured, "True");
        let no = ExactFilters::new().with(ArticleField::IsFeatured, "false");
        assert!(MatchesExactFields::new(&yes).is_satisfied_by(&featured));
        assert!(!MatchesExactFields::new(&no).is_satisfied_by(&featured));
    }

    #[test]
    fn empty_filters_match_everything() {
        let filters = ExactFilters::new();
        assert!(MatchesExactFields::new(&filters).is_satisfied_by(&article(ArticleFields::default())));
    }
}
