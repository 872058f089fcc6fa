use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

use super::new_document_id;
use crate::domain::{
    errors::{DomainError, DomainResult},
    store::{Document, DocumentData, DocumentPage, DocumentStore},
};

fn map_error(err: sqlx::Error) -> DomainError {
    DomainError::Persistence(err.to_string())
}

/// JSON path addressing a top-level document field.
fn field_path(field: &str) -> String {
    format!("$.\"{}\"", field.replace('"', ""))
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Documents stored as JSON text in a single `documents` table, one row per
/// (collection, id). `seq` preserves insertion order.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: Arc<SqlitePool>,
}

impl SqliteDocumentStore {
    pub const fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: String,
    data: String,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let data: DocumentData = serde_json::from_str(&row.data).map_err(|err| {
            DomainError::Persistence(format!("document {} is not a JSON object: {err}", row.id))
        })?;
        Ok(Self::new(row.id, data))
    }
}

fn into_documents(rows: Vec<DocumentRow>) -> DomainResult<Vec<Document>> {
    rows.into_iter().map(Document::try_from).collect()
}

fn encode(data: &DocumentData) -> DomainResult<String> {
    serde_json::to_string(data).map_err(|err| DomainError::Persistence(err.to_string()))
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> DomainResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = ? AND id = ?",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_error)?;

        row.map(Document::try_from).transpose()
    }

    async fn get_all(&self, collection: &str) -> DomainResult<Vec<Document>> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = ? ORDER BY seq",
        )
        .bind(collection)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        into_documents(rows)
    }

    async fn get_all_paged(
        &self,
        collection: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = ?")
            .bind(collection)
            .fetch_one(&*self.pool)
            .await
            .map_err(map_error)?;

        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents WHERE collection = ? ORDER BY seq LIMIT ? OFFSET ?",
        )
        .bind(collection)
        .bind(i64::from(limit))
        .bind(to_i64(offset))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(DocumentPage {
            documents: into_documents(rows)?,
            total_elements: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> DomainResult<Vec<Document>> {
        let path = field_path(field);
        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents \
             WHERE collection = ? AND json_type(data, ?) = 'text' AND json_extract(data, ?) = ? \
             ORDER BY seq",
        )
        .bind(collection)
        .bind(&path)
        .bind(&path)
        .bind(value)
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        into_documents(rows)
    }

    async fn query_equals_paged(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        let path = field_path(field);

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents \
             WHERE collection = ? AND json_type(data, ?) = 'text' AND json_extract(data, ?) = ?",
        )
        .bind(collection)
        .bind(&path)
        .bind(&path)
        .bind(value)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_error)?;

        let rows = sqlx::query_as::<_, DocumentRow>(
            "SELECT id, data FROM documents \
             WHERE collection = ? AND json_type(data, ?) = 'text' AND json_extract(data, ?) = ? \
             ORDER BY seq LIMIT ? OFFSET ?",
        )
        .bind(collection)
        .bind(&path)
        .bind(&path)
        .bind(value)
        .bind(i64::from(limit))
        .bind(to_i64(offset))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(DocumentPage {
            documents: into_documents(rows)?,
            total_elements: u64::try_from(total).unwrap_or_default(),
        })
    }

    async fn put(
        &self,
        collection: &str,
        id: Option<&str>,
        data: DocumentData,
    ) -> DomainResult<String> {
        let id = id.map_or_else(new_document_id, str::to_owned);
        sqlx::query(
            "INSERT INTO documents (collection, id, data) VALUES (?, ?, ?) \
             ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data",
        )
        .bind(collection)
        .bind(&id)
        .bind(encode(&data)?)
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        Ok(id)
    }

    async fn patch(&self, collection: &str, id: &str, data: DocumentData) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE documents SET data = json_patch(data, ?) WHERE collection = ? AND id = ?",
        )
        .bind(encode(&data)?)
        .bind(collection)
        .bind(id)
        .execute(&*self.pool)
        .await
        .map_err(map_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("document {id} not found")));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&*self.pool)
            .await
            .map_err(map_error)?;
        Ok(())
    }
}
