// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService,
            auth::{AdminCredentials, AuthCommandService},
            images::ImageCommandService,
        },
        ports::{
            assets::AssetStore,
            security::{AccessGate, PasswordHasher, TokenManager},
        },
        queries::articles::ArticleQueryService,
    },
    domain::store::DocumentStore,
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub image_commands: Arc<ImageCommandService>,
    pub auth_commands: Arc<AuthCommandService>,
    access_gate: Arc<dyn AccessGate>,
}

impl ApplicationServices {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        collection: &str,
        assets: Arc<dyn AssetStore>,
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
        access_gate: Arc<dyn AccessGate>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&store),
            Arc::clone(&assets),
            collection,
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&store), collection));
        let image_commands = Arc::new(ImageCommandService::new(Arc::clone(&assets)));
        let auth_commands = Arc::new(AuthCommandService::new(
            credentials,
            password_hasher,
            token_manager,
        ));

        Self {
            article_commands,
            article_queries,
            image_commands,
            auth_commands,
            access_gate,
        }
    }

    pub fn access_gate(&self) -> Arc<dyn AccessGate> {
        Arc::clone(&self.access_gate)
    }
}
