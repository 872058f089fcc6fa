use std::sync::Arc;

use crate::domain::store::DocumentStore;

/// Read side of the news collection. Holds no per-request state, so one
/// instance is shared by every request.
pub struct ArticleQueryService {
    pub(super) store: Arc<dyn DocumentStore>,
    pub(super) collection: String,
}

impl ArticleQueryService {
    pub fn new(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }
}
