//! Mapping between articles and their stored document form.
//!
//! Stored documents may have been written by other clients, so reading is
//! lenient: text fields accept any scalar and flags accept booleans or their
//! string spelling. Writing is strict and omits every absent field.

use crate::domain::article::entity::{Article, ArticleFields};
use crate::domain::article::value_objects::{ArticleField, ArticleId};
use crate::domain::errors::DomainResult;
use crate::domain::store::{Document, DocumentData};
use serde_json::Value;

/// Decode a stored flag: `true`/`false` booleans, or the strings `"true"` and
/// `"false"` in any case. Anything else is treated as absent.
pub fn decode_flag(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::String(text) => {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                Some(true)
            } else if text.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn decode_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

impl ArticleFields {
    pub fn from_document(data: &DocumentData) -> Self {
        let mut fields = Self::default();
        for field in ArticleField::ALL {
            let Some(value) = data.get(field.name()) else {
                continue;
            };
            if field.is_flag() {
                if let Some(flag) = decode_flag(value) {
                    fields.set_flag(field, flag);
                }
            } else if let Some(text) = decode_text(value) {
                fields.set_text(field, text);
            }
        }
        fields
    }

    pub fn to_document(&self) -> DocumentData {
        let mut data = DocumentData::new();
        for field in ArticleField::ALL {
            let value = if field.is_flag() {
                self.flag(field).map(Value::Bool)
            } else {
                self.text(field).map(|text| Value::String(text.into_owned()))
            };
            if let Some(value) = value {
                data.insert(field.name().to_string(), value);
            }
        }
        data
    }
}

impl Article {
    pub fn from_document(document: Document) -> DomainResult<Self> {
        let fields = ArticleFields::from_document(&document.data);
        Ok(Self::new(ArticleId::new(document.id)?, fields))
    }
}
