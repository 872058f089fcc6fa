// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedAdmin,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedAdmin,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        if self
            .store
            .get(&self.collection, id.as_str())
            .await?
            .is_none()
        {
            return Err(ApplicationError::not_found("article not found"));
        }

        self.store.delete(&self.collection, id.as_str()).await?;
        tracing::info!(article_id = %id, admin = %actor.username, "article deleted");
        Ok(())
    }
}
