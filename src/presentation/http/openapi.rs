// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, PaginatedResult};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, env};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Wire shape of every article listing.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageResponse {
    pub articles: Vec<ArticleDto>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl From<PaginatedResult<ArticleDto>> for ArticlePageResponse {
    fn from(page: PaginatedResult<ArticleDto>) -> Self {
        Self {
            articles: page.articles,
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
            has_next: page.has_next,
            has_previous: page.has_previous,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::news::list_news,
        crate::presentation::http::controllers::news::list_news_by_category,
        crate::presentation::http::controllers::news::get_news,
        crate::presentation::http::controllers::news::create_news,
        crate::presentation::http::controllers::news::update_news,
        crate::presentation::http::controllers::news::delete_news,
        crate::presentation::http::controllers::admin_news::list_news,
        crate::presentation::http::controllers::admin_news::get_news,
        crate::presentation::http::controllers::images::upload_file,
        crate::presentation::http::controllers::images::upload_base64,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            MessageResponse,
            ArticlePageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::auth::LoginRequest,
            crate::presentation::http::controllers::payload::ArticlePayload,
            crate::presentation::http::controllers::images::Base64ImageRequest,
            crate::presentation::http::controllers::images::ImageUploadForm,
            crate::application::dto::AuthTokenDto,
            crate::application::dto::ArticleDto,
            crate::application::dto::ImageUploadDto
        )
    ),
    tags(
        (name = "Auth", description = "Admin login"),
        (name = "News", description = "Public reads and authenticated article mutations"),
        (name = "Admin", description = "Administrative listings with per-field filters"),
        (name = "Images", description = "Standalone image uploads"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsroom API",
        description = "Bilingual (English/Arabic) news service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        if urls.is_empty() {
            return;
        }

        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();
        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
