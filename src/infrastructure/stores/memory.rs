// src/infrastructure/stores/memory.rs
use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use super::new_document_id;
use crate::domain::{
    errors::{DomainError, DomainResult},
    store::{Document, DocumentData, DocumentPage, DocumentStore},
};

/// Process-local store keeping each collection in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn field_equals(document: &Document, field: &str, value: &str) -> bool {
    matches!(document.data.get(field), Some(Value::String(stored)) if stored == value)
}

fn page_of(documents: Vec<Document>, offset: u64, limit: u32) -> DocumentPage {
    let total_elements = documents.len() as u64;
    let skip = usize::try_from(offset).unwrap_or(usize::MAX);
    let documents = documents
        .into_iter()
        .skip(skip)
        .take(limit as usize)
        .collect();
    DocumentPage {
        documents,
        total_elements,
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DomainResult<Option<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned())
    }

    async fn get_all(&self, collection: &str) -> DomainResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    async fn get_all_paged(
        &self,
        collection: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        let all = self.get_all(collection).await?;
        Ok(page_of(all, offset, limit))
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> DomainResult<Vec<Document>> {
        let guard = self.collections.read().await;
        Ok(guard
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| field_equals(doc, field, value))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn query_equals_paged(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        let matches = self.query_equals(collection, field, value).await?;
        Ok(page_of(matches, offset, limit))
    }

    async fn put(
        &self,
        collection: &str,
        id: Option<&str>,
        data: DocumentData,
    ) -> DomainResult<String> {
        let id = id.map_or_else(new_document_id, str::to_owned);
        let mut guard = self.collections.write().await;
        let docs = guard.entry(collection.to_owned()).or_default();
        match docs.iter_mut().find(|doc| doc.id == id) {
            Some(existing) => existing.data = data,
            None => docs.push(Document::new(id.clone(), data)),
        }
        Ok(id)
    }

    async fn patch(&self, collection: &str, id: &str, data: DocumentData) -> DomainResult<()> {
        let mut guard = self.collections.write().await;
        let existing = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or_else(|| DomainError::NotFound(format!("document {id} not found")))?;
        existing.data.extend(data);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()> {
        let mut guard = self.collections.write().await;
        if let Some(docs) = guard.get_mut(collection) {
            docs.retain(|doc| doc.id != id);
        }
        Ok(())
    }
}
