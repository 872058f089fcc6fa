pub mod assets;
pub mod security;
