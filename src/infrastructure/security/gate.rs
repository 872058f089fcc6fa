// src/infrastructure/security/gate.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedAdmin, Capability},
    error::ApplicationError,
    ports::security::{AccessGate, TokenManager},
};

/// Admits bearers of a valid token carrying the `news:write` right.
pub struct TokenAccessGate {
    tokens: Arc<dyn TokenManager>,
    required: Capability,
}

impl TokenAccessGate {
    pub fn new(tokens: Arc<dyn TokenManager>) -> Self {
        Self {
            tokens,
            required: Capability::news_write(),
        }
    }
}

#[async_trait]
impl AccessGate for TokenAccessGate {
    async fn authorize(&self, bearer: Option<&str>) -> ApplicationResult<AuthenticatedAdmin> {
        let token = bearer
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApplicationError::unauthorized("missing bearer token"))?;

        let admin = self.tokens.authenticate(token).await?;
        let Capability { resource, action } = &self.required;
        if !admin.has_capability(resource, action) {
            return Err(ApplicationError::forbidden(format!(
                "missing capability {resource}:{action}"
            )));
        }
        Ok(admin)
    }
}
