// tests/support/builders.rs
use newsroom_core::domain::article::ArticleFields;

pub struct ArticleBuilder {
    fields: ArticleFields,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            fields: ArticleFields::default(),
        }
    }

    pub fn title(mut self, english: impl Into<String>) -> Self {
        self.fields.title_english = Some(english.into());
        self
    }

    pub fn title_arabic(mut self, arabic: impl Into<String>) -> Self {
        self.fields.title_arabic = Some(arabic.into());
        self
    }

    pub fn description(mut self, english: impl Into<String>) -> Self {
        self.fields.description_english = Some(english.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.fields.category = Some(category.into());
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.fields.date = Some(date.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.fields.image = Some(image.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.fields.is_featured = Some(featured);
        self
    }

    pub fn build(self) -> ArticleFields {
        self.fields
    }
}
