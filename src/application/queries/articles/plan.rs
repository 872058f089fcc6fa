use crate::domain::article::{ArticleField, CategoryScope, ExactFilters, SearchTerm};

/// How a listing request is served.
///
/// Store-side pagination is used whenever the request can be expressed as the
/// store's single equality filter. Substring search and per-field filters
/// cannot, so those plans read the whole candidate set in one call and filter
/// it in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetrievalPlan {
    /// Offset/limit paging by the store; totals come from the store.
    Pushdown { scope: CategoryScope },
    /// Free-text search over the candidate set, then slice the requested page.
    SearchThenSlice {
        scope: CategoryScope,
        term: SearchTerm,
    },
    /// Exact-field filtering over the candidate set, returned as a single page.
    ExactMatch {
        scope: CategoryScope,
        filters: ExactFilters,
    },
}

impl RetrievalPlan {
    /// Search wins over field filters; callers reject requests carrying both.
    pub fn select(scope: CategoryScope, search: Option<SearchTerm>, filters: ExactFilters) -> Self {
        if let Some(term) = search {
            return Self::SearchThenSlice { scope, term };
        }

        if !filters.is_empty() {
            let scope = match (scope, filters.get(ArticleField::Category)) {
                (CategoryScope::All, Some(category)) => CategoryScope::Only(category.to_string()),
                (scope, _) => scope,
            };
            return Self::ExactMatch { scope, filters };
        }

        Self::Pushdown { scope }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pushdown { .. } => "pushdown",
            Self::SearchThenSlice { .. } => "search_then_slice",
            Self::ExactMatch { .. } => "exact_match",
        }
    }

    pub const fn scope(&self) -> &CategoryScope {
        match self {
            Self::Pushdown { scope }
            | Self::SearchThenSlice { scope, .. }
            | Self::ExactMatch { scope, .. } => scope,
        }
    }
}
