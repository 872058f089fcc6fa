use crate::domain::pagination::PageWindow;
use serde::{Deserialize, Serialize};

/// One page of results plus the navigation metadata derived from
/// [`PageWindow`]. Every listing strategy produces this same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(
        serialize = "T: Serialize",
        deserialize = "T: serde::de::DeserializeOwned"
    )
)]
pub struct PaginatedResult<T> {
    pub articles: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PaginatedResult<T> {
    pub fn new(articles: Vec<T>, page: u32, size: u32, total_elements: u64) -> Self {
        let window = PageWindow::compute(total_elements, page, size);
        Self {
            articles,
            page,
            size,
            total_elements,
            total_pages: window.total_pages,
            has_next: window.has_next,
            has_previous: window.has_previous,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            articles: self.articles.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            has_next: self.has_next,
            has_previous: self.has_previous,
        }
    }
}
