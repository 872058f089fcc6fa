pub mod document;
pub mod entity;
pub mod image;
pub mod specifications;
pub mod value_objects;

pub use document::decode_flag;
pub use entity::{Article, ArticleFields};
pub use image::{ImagePayload, is_inline_payload};
pub use specifications::{ArticleSpecification, MatchesExactFields, MatchesSearchTerm};
pub use value_objects::{ArticleField, ArticleId, CategoryScope, ExactFilters, SearchTerm};
