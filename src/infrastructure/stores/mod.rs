// src/infrastructure/stores/mod.rs
mod memory;
mod sqlite_document;

pub use memory::InMemoryDocumentStore;
pub use sqlite_document::SqliteDocumentStore;

pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
