// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{
    ADMIN_TOKEN, FakeAssetStore, FakeTokenManager, PlainPasswordHasher, RecordingStore,
};
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use newsroom_core::application::{
    commands::{articles::ArticleCommandService, auth::AdminCredentials},
    dto::{AuthenticatedAdmin, Capability},
    ports::{assets::AssetStore, security::TokenManager},
    queries::articles::ArticleQueryService,
    services::ApplicationServices,
};
use newsroom_core::domain::{article::ArticleFields, store::DocumentStore};
use newsroom_core::infrastructure::security::gate::TokenAccessGate;
use newsroom_core::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub const COLLECTION: &str = "news";
pub const ADMIN_PASSWORD: &str = "correct horse";

/// Smallest byte sequence recognised as a PNG.
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

pub fn png_data_uri() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(PNG_BYTES))
}

pub fn admin() -> AuthenticatedAdmin {
    AuthenticatedAdmin {
        username: "admin".into(),
        capabilities: [Capability::news_write()].into_iter().collect(),
        issued_at: chrono::Utc::now(),
        expires_at: chrono::Utc::now(),
    }
}

pub struct TestApp {
    pub router: axum::Router,
    pub store: Arc<RecordingStore>,
    pub assets: Arc<FakeAssetStore>,
}

pub fn build_test_app() -> TestApp {
    build_test_app_with_assets(FakeAssetStore::new())
}

pub fn build_test_app_with_assets(assets: FakeAssetStore) -> TestApp {
    let store = Arc::new(RecordingStore::new());
    let assets = Arc::new(assets);
    let tokens: Arc<dyn TokenManager> = Arc::new(FakeTokenManager);

    let services = Arc::new(ApplicationServices::new(
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        COLLECTION,
        Arc::clone(&assets) as Arc<dyn AssetStore>,
        AdminCredentials {
            username: "admin".into(),
            password_hash: format!("plain:{ADMIN_PASSWORD}"),
        },
        Arc::new(PlainPasswordHasher),
        Arc::clone(&tokens),
        Arc::new(TokenAccessGate::new(tokens)),
    ));

    let router = build_router(HttpState { services }, &[]);
    TestApp {
        router,
        store,
        assets,
    }
}

pub fn query_service(store: &Arc<RecordingStore>) -> ArticleQueryService {
    ArticleQueryService::new(Arc::clone(store) as Arc<dyn DocumentStore>, COLLECTION)
}

pub fn command_service(
    store: &Arc<RecordingStore>,
    assets: &Arc<FakeAssetStore>,
) -> ArticleCommandService {
    ArticleCommandService::new(
        Arc::clone(store) as Arc<dyn DocumentStore>,
        Arc::clone(assets) as Arc<dyn AssetStore>,
        COLLECTION,
    )
}

/// Store an article directly, bypassing the HTTP layer. Returns its id.
pub async fn seed(store: &RecordingStore, fields: ArticleFields) -> String {
    let id = store
        .put(COLLECTION, None, fields.to_document())
        .await
        .expect("seed article");
    store.reset();
    id
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authorized(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub fn as_admin(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    authorized(method, uri, Some(ADMIN_TOKEN), body)
}

pub async fn send(router: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    read_json(response).await
}

pub async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub fn assert_error(status: StatusCode, body: &Value, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(status, expected_status, "unexpected status, body: {body}");
    assert_eq!(body["error"], expected_error);
    let message = body["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty(), "expected non-empty message field");
}

pub fn ids(page: &Value) -> Vec<String> {
    page["articles"]
        .as_array()
        .expect("articles array")
        .iter()
        .map(|article| article["id"].as_str().unwrap().to_owned())
        .collect()
}
