// src/presentation/http/controllers/admin_news.rs
use crate::application::{
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::{ArticleField, CategoryScope, ExactFilters};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query, rejection::QueryRejection},
};

const SEARCH_PARAM: &str = "search";
const PAGE_PARAM: &str = "page";
const SIZE_PARAM: &str = "size";

fn parse_index(name: &str, value: &str) -> HttpResult<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| HttpError::bad_request(format!("{name} must be an integer")))
}

/// Split raw admin query pairs into paging, free-text search and per-field
/// equality filters. Any other parameter must name an article field.
pub fn admin_list_query(pairs: Vec<(String, String)>) -> HttpResult<ListArticlesQuery> {
    let mut query = ListArticlesQuery::default();
    let mut filter_pairs = Vec::new();

    for (name, value) in pairs {
        if value.trim().is_empty() {
            continue;
        }
        match name.as_str() {
            SEARCH_PARAM => query.search = Some(value),
            PAGE_PARAM => query.page = Some(parse_index(PAGE_PARAM, &value)?),
            SIZE_PARAM => query.size = Some(parse_index(SIZE_PARAM, &value)?),
            name if name == ArticleField::Category.name()
                && CategoryScope::from_param(Some(value.as_str())) == CategoryScope::All => {}
            _ => filter_pairs.push((name, value)),
        }
    }

    query.filters = ExactFilters::try_from(filter_pairs)
        .map_err(|err| HttpError::from_error(err.into()))?;
    Ok(query)
}

#[utoipa::path(
    get,
    path = "/api/admin/news",
    params(
        ("search" = Option<String>, Query, description = "Free-text search; cannot be combined with field filters"),
        ("page" = Option<i64>, Query, description = "Zero-based page index"),
        ("size" = Option<i64>, Query, description = "Page size, default 10, capped at 100"),
        ("category" = Option<String>, Query, description = "Exact category; any other article field name is accepted the same way")
    ),
    responses(
        (status = 200, description = "Filtered articles.", body = ArticlePageResponse),
        (status = 400, description = "Unknown field or search combined with filters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Token lacks the news:write right.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> HttpResult<Json<ArticlePageResponse>> {
    let Query(pairs) = params?;
    let query = admin_list_query(pairs)?;

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
    path = "/api/admin/news/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Admin"
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
