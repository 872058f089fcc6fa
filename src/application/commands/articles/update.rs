use super::{ArticleCommandService, image::inline_image};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedAdmin},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleFields, ArticleId},
};

pub struct UpdateArticleCommand {
    pub id: String,
    pub fields: ArticleFields,
}

impl ArticleCommandService {
    /// Merge the supplied fields into an existing article. Absent fields keep
    /// their stored values.
    pub async fn update_article(
        &self,
        actor: &AuthenticatedAdmin,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let existing = self
            .store
            .get(&self.collection, id.as_str())
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        let mut article = Article::from_document(existing)?;

        let mut patch = command.fields;
        if let Some(payload) = inline_image(patch.image.as_deref())? {
            if let Some(previous) = article.fields.image.as_deref() {
                self.discard_image(previous).await;
            }
            patch.image = Some(self.assets.upload(&payload).await?);
        }

        if !patch.is_empty() {
            self.store
                .patch(&self.collection, id.as_str(), patch.to_document())
                .await?;
        }
        tracing::info!(article_id = %id, admin = %actor.username, "article updated");

        article.apply(patch);
        Ok(article.into())
    }
}
