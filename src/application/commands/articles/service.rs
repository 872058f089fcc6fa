// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::assets::AssetStore, domain::store::DocumentStore};

pub struct ArticleCommandService {
    pub(super) store: Arc<dyn DocumentStore>,
    pub(super) assets: Arc<dyn AssetStore>,
    pub(super) collection: String,
}

impl ArticleCommandService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        assets: Arc<dyn AssetStore>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            assets,
            collection: collection.into(),
        }
    }
}
