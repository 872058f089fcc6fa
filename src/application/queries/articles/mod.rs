mod get_by_id;
mod list;
mod plan;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use plan::RetrievalPlan;
pub use service::ArticleQueryService;
