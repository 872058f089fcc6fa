// src/application/commands/articles/create.rs
use super::{ArticleCommandService, image::inline_image};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAdmin},
        error::ApplicationResult,
    },
    domain::article::{Article, ArticleFields, ArticleId},
};

pub struct CreateArticleCommand {
    pub fields: ArticleFields,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedAdmin,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut fields = command.fields;

        if let Some(payload) = inline_image(fields.image.as_deref())? {
            fields.image = Some(self.assets.upload(&payload).await?);
        }

        let id = self
            .store
            .put(&self.collection, None, fields.to_document())
            .await?;
        tracing::info!(article_id = %id, admin = %actor.username, "article created");

        Ok(Article::new(ArticleId::new(id)?, fields).into())
    }
}
