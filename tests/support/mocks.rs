// tests/support/mocks.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use newsroom_core::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedAdmin, Capability, TokenSubject},
    error::ApplicationError,
    ports::{
        assets::{AssetError, AssetResult, AssetStore},
        security::{PasswordHasher, TokenManager},
    },
};
use newsroom_core::domain::{
    article::ImagePayload,
    errors::DomainResult,
    store::{Document, DocumentData, DocumentPage, DocumentStore},
};
use newsroom_core::infrastructure::stores::InMemoryDocumentStore;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const READER_TOKEN: &str = "reader-token";
pub const HOSTED_PREFIX: &str = "https://res.cloudinary.com/test/image/upload/v1/news/";

/// In-memory store that records which operations were called.
#[derive(Default)]
pub struct RecordingStore {
    inner: InMemoryDocumentStore,
    calls: Mutex<Vec<&'static str>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, op: &'static str) {
        self.calls.lock().unwrap().push(op);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == op).count()
    }

    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl DocumentStore for RecordingStore {
    async fn get(&self, collection: &str, id: &str) -> DomainResult<Option<Document>> {
        self.record("get");
        self.inner.get(collection, id).await
    }

    async fn get_all(&self, collection: &str) -> DomainResult<Vec<Document>> {
        self.record("get_all");
        self.inner.get_all(collection).await
    }

    async fn get_all_paged(
        &self,
        collection: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        self.record("get_all_paged");
        self.inner.get_all_paged(collection, offset, limit).await
    }

    async fn query_equals(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> DomainResult<Vec<Document>> {
        self.record("query_equals");
        self.inner.query_equals(collection, field, value).await
    }

    async fn query_equals_paged(
        &self,
        collection: &str,
        field: &str,
        value: &str,
        offset: u64,
        limit: u32,
    ) -> DomainResult<DocumentPage> {
        self.record("query_equals_paged");
        self.inner
            .query_equals_paged(collection, field, value, offset, limit)
            .await
    }

    async fn put(
        &self,
        collection: &str,
        id: Option<&str>,
        data: DocumentData,
    ) -> DomainResult<String> {
        self.record("put");
        self.inner.put(collection, id, data).await
    }

    async fn patch(&self, collection: &str, id: &str, data: DocumentData) -> DomainResult<()> {
        self.record("patch");
        self.inner.patch(collection, id, data).await
    }

    async fn delete(&self, collection: &str, id: &str) -> DomainResult<()> {
        self.record("delete");
        self.inner.delete(collection, id).await
    }
}

/// Asset host that hands out predictable URLs and can be told to fail deletes.
#[derive(Default)]
pub struct FakeAssetStore {
    uploads: Mutex<Vec<String>>,
    deletes: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl FakeAssetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssetStore for FakeAssetStore {
    async fn upload(&self, image: &ImagePayload) -> AssetResult<String> {
        let mut uploads = self.uploads.lock().unwrap();
        let extension = image.content_type().trim_start_matches("image/");
        let url = format!("{HOSTED_PREFIX}{}.{extension}", uploads.len() + 1);
        uploads.push(url.clone());
        Ok(url)
    }

    async fn delete(&self, url: &str) -> AssetResult<()> {
        self.deletes.lock().unwrap().push(url.to_owned());
        if self.fail_deletes {
            Err(AssetError::UploadFailure("host unavailable".into()))
        } else {
            Ok(())
        }
    }

    fn is_hosted(&self, url: &str) -> bool {
        url.starts_with("https://res.cloudinary.com/")
    }
}

/// Accepts [`ADMIN_TOKEN`] (full rights) and [`READER_TOKEN`] (no write right).
pub struct FakeTokenManager;

#[async_trait]
impl TokenManager for FakeTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = Utc::now();
        Ok(AuthTokenDto {
            token: format!("token-for-{}", subject.username),
            issued_at,
            expires_at: issued_at + Duration::hours(1),
            expires_in: 3600,
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        let capabilities = match token {
            ADMIN_TOKEN => HashSet::from([Capability::news_write()]),
            READER_TOKEN => HashSet::from([Capability::new("news", "read")]),
            _ => return Err(ApplicationError::unauthorized("invalid token")),
        };
        Ok(AuthenticatedAdmin {
            username: "admin".into(),
            capabilities,
            issued_at: Utc::now(),
            expires_at: Utc::now() + Duration::hours(1),
        })
    }
}

/// "Hashes" are `plain:<password>`.
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain:{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain:{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}
