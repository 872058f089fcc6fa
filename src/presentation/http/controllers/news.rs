// src/presentation/http/controllers/news.rs
use super::payload::ArticlePayload;
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{ArticlePageResponse, MessageResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// Category to list; `all` or absent lists every category.
    pub category: Option<String>,
    /// Case-insensitive substring matched against titles, descriptions,
    /// category and date.
    pub search: Option<String>,
    /// Zero-based page index. Negative values are treated as 0.
    pub page: Option<i64>,
    /// Page size, default 10, capped at 100.
    pub size: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    pub search: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/news",
    params(NewsListParams),
    responses(
        (status = 200, description = "One page of articles.", body = ArticlePageResponse),
        (status = 400, description = "Malformed query.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    params: Result<Query<NewsListParams>, QueryRejection>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let Query(params) = params?;
    let query = ListArticlesQuery {
        category: params.category,
        search: params.search,
        page: params.page,
        size: params.size,
        ..ListArticlesQuery::default()
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/news/category/{category}",
    params(("category" = String, Path, description = "Exact category name"), CategoryListParams),
    responses(
        (status = 200, description = "One page of articles in the category.", body = ArticlePageResponse)
    ),
    security(()),
    tag = "News"
)]
pub async fn list_news_by_category(
    Extension(state): Extension<HttpState>,
    Path(category): Path<String>,
    params: Result<Query<CategoryListParams>, QueryRejection>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let Query(params) = params?;
    let query = ListArticlesQuery {
        category: Some(category),
        search: params.search,
        page: params.page,
        size: params.size,
        ..ListArticlesQuery::default()
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/news/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/news",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid payload or image.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload?;
    let command = CreateArticleCommand {
        fields: payload.into(),
    };

    state
        .services
        .article_commands
        .create_article(&admin, command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/news/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "Article after the update.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<String>,
    payload: Result<Json<ArticlePayload>, JsonRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Json(payload) = payload?;
    let command = UpdateArticleCommand {
        id,
        fields: payload.into(),
    };

    state
        .services
        .article_commands
        .update_article(&admin, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/news/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article deleted.", body = MessageResponse),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn delete_news(
    Extension(state): Extension<HttpState>,
    Authenticated(admin): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .services
        .article_commands
        .delete_article(&admin, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(MessageResponse::new("Successfully deleted")))
}
