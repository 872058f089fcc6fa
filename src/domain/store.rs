// src/domain/store.rs
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Field map of a stored document, without its identifier.
pub type DocumentData = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: DocumentData,
}

impl Document {
    pub fn new(id: impl Into<String>, data: DocumentData) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// One offset/limit page as returned by the store, with the store's own count
/// of all documents matching the same filter.
#[derive(Debug, Clone, Default)]
pub struct DocumentPage {
    pub documents: Vec<Document>,
    pub total_elements: u64,
}

/// Collection-oriented document store.
///
/// Listing methods return documents in the store's natural order; callers must
/// not assume any sort key. `patch` merges the supplied fields into the existing
/// document and fails with `NotFound` when the identifier is absent.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> DomainResult<Option<Document>>;

    async fn get_all(&self, collection: &str) -> DomainResult<Vec<Document>>;

    async fn get_all_paged(
        &self,
        collection: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage>;

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> DomainResult<Vec<Document>>;

    async fn query_equals_paged(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage>;

    async fn put(&self, collection: &str, id: Option<&str>, data: DocumentData)
    -> DomainResult<String>;

    async fn patch(&self, collection: &str, id: &str, data: DocumentData) -> DomainResult<()>;

    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()>;
}
