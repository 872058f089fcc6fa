use super::{ArticleQueryService, plan::RetrievalPlan};
use crate::{
    application::{
        dto::{ArticleDto, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{
            Article, ArticleField, ArticleSpecification, CategoryScope, ExactFilters,
            MatchesExactFields, MatchesSearchTerm, SearchTerm,
        },
        errors::DomainResult,
        pagination::{PageRequest, PageWindow},
        store::{Document, DocumentPage},
    },
};

/// Raw listing parameters; normalization happens once inside
/// [`ArticleQueryService::list_articles`].
#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub filters: ExactFilters,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let request = PageRequest::normalize(query.page, query.size);
        let search = SearchTerm::parse(query.search.as_deref());
        if search.is_some() && !query.filters.is_empty() {
            return Err(ApplicationError::validation(
                "free-text search cannot be combined with field filters",
            ));
        }

        let scope = CategoryScope::from_param(query.category.as_deref());
        let plan = RetrievalPlan::select(scope, search, query.filters);
        tracing::debug!(
            plan = plan.name(),
            category = plan.scope().category().unwrap_or(CategoryScope::ALL_SENTINEL),
            page = request.page(),
            size = request.size(),
            "listing articles"
        );

        let result = match plan {
            RetrievalPlan::Pushdown { scope } => self.list_pushdown(&scope, request).await?,
            RetrievalPlan::SearchThenSlice { scope, term } => {
                self.list_search(&scope, &term, request).await?
            }
            RetrievalPlan::ExactMatch { scope, filters } => {
                self.list_exact(&scope, &filters).await?
            }
        };

        Ok(result.map(ArticleDto::from))
    }

    async fn list_pushdown(
        &self,
        scope: &CategoryScope,
        request: PageRequest,
    ) -> ApplicationResult<PaginatedResult<Article>> {
        let DocumentPage {
            documents,
            total_elements,
        } = match scope.category() {
            None => {
                self.store
                    .get_all_paged(&self.collection, request.offset(), request.size())
                    .await?
            }
            Some(category) => {
                self.store
                    .query_equals_paged(
                        &self.collection,
                        ArticleField::Category.name(),
                        category,
                        request.offset(),
                        request.size(),
                    )
                    .await?
            }
        };

        let articles = into_articles(documents)?;
        Ok(PaginatedResult::new(
            articles,
            request.page(),
            request.size(),
            total_elements,
        ))
    }

    async fn list_search(
        &self,
        scope: &CategoryScope,
        term: &SearchTerm,
        request: PageRequest,
    ) -> ApplicationResult<PaginatedResult<Article>> {
        let spec = MatchesSearchTerm::new(term);
        let matches: Vec<Article> = self
            .candidates(scope)
            .await?
            .into_iter()
            .filter(|article| spec.is_satisfied_by(article))
            .collect();

        let total_elements = matches.len() as u64;
        let window = PageWindow::compute(total_elements, request.page(), request.size());
        Ok(PaginatedResult::new(
            window.slice(matches),
            request.page(),
            request.size(),
            total_elements,
        ))
    }

    async fn list_exact(
        &self,
        scope: &CategoryScope,
        filters: &ExactFilters,
    ) -> ApplicationResult<PaginatedResult<Article>> {
        let spec = MatchesExactFields::new(filters);
        let matches: Vec<Article> = self
            .candidates(scope)
            .await?
            .into_iter()
            .filter(|article| spec.is_satisfied_by(article))
            .collect();

        let total_elements = matches.len() as u64;
        let size = u32::try_from(matches.len()).unwrap_or(u32::MAX);
        Ok(PaginatedResult::new(matches, 0, size, total_elements))
    }

    /// Full candidate set for in-memory filtering, read with a single store call
    /// and kept in store order.
    async fn candidates(&self, scope: &CategoryScope) -> ApplicationResult<Vec<Article>> {
        let documents = match scope.category() {
            None => self.store.get_all(&self.collection).await?,
            Some(category) => {
                self.store
                    .query_equals(&self.collection, ArticleField::Category.name(), category)
                    .await?
            }
        };
        Ok(into_articles(documents)?)
    }
}

fn into_articles(documents: Vec<Document>) -> DomainResult<Vec<Article>> {
    documents.into_iter().map(Article::from_document).collect()
}
