// src/presentation/http/controllers/mod.rs
pub mod admin_news;
pub mod auth;
pub mod images;
pub mod news;
pub mod payload;
