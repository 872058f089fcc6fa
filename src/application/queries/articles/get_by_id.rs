use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        let document = self
            .store
            .get(&self.collection, id.as_str())
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(Article::from_document(document)?.into())
    }
}
