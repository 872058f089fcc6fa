pub mod article;
pub mod errors;
pub mod pagination;
pub mod store;
