pub mod assets;
pub mod database;
pub mod security;
pub mod stores;
