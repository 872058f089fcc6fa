// src/config.rs
use crate::{
    application::commands::auth::AdminCredentials, infrastructure::assets::CloudinaryConfig,
};
use std::{env, time::Duration};
use thiserror::Error;

/// `DATABASE_URL` value selecting the process-local store.
pub const MEMORY_DATABASE: &str = "memory";

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    biscuit_private_key: String,
    token_ttl: Duration,
    allowed_origins: Vec<String>,
    admin: AdminCredentials,
    cloudinary: CloudinaryConfig,
    news_collection: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://news.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

const fn default_token_ttl() -> u64 {
    3600
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from the process environment, after loading a
    /// `.env` file when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as
    /// unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database_url = get("DATABASE_URL").unwrap_or_else(default_database_url);
        let listen_addr = get("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let biscuit_private_key = require("BISCUIT_ROOT_PRIVATE_KEY")?;
        if biscuit_private_key.len() != 64
            || !biscuit_private_key.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(ConfigError::Invalid(
                "BISCUIT_ROOT_PRIVATE_KEY must be a 32-byte hex string".into(),
            ));
        }

        let token_ttl_secs = match get("TOKEN_TTL_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!("TOKEN_TTL_SECONDS must be a positive integer, got {raw}"))
                })?,
            None => default_token_ttl(),
        };

        let allowed_origins = get("ALLOWED_ORIGINS").map_or_else(default_allowed_origins, |s| {
            s.split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect()
        });

        let admin = AdminCredentials {
            username: get("ADMIN_USERNAME").unwrap_or_else(|| "admin".into()),
            password_hash: require("ADMIN_PASSWORD_HASH")?,
        };
        if !admin.password_hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid(
                "ADMIN_PASSWORD_HASH must be an argon2 PHC string (see the hash_password binary)"
                    .into(),
            ));
        }

        let cloudinary = CloudinaryConfig {
            cloud_name: require("CLOUDINARY_CLOUD_NAME")?,
            api_key: require("CLOUDINARY_API_KEY")?,
            api_secret: require("CLOUDINARY_API_SECRET")?,
            folder: get("CLOUDINARY_FOLDER").unwrap_or_else(|| "news".into()),
        };

        let news_collection = get("NEWS_COLLECTION").unwrap_or_else(|| "news".into());

        Ok(Self {
            database_url,
            listen_addr,
            biscuit_private_key,
            token_ttl: Duration::from_secs(token_ttl_secs),
            allowed_origins,
            admin,
            cloudinary,
            news_collection,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn biscuit_private_key(&self) -> &str {
        &self.biscuit_private_key
    }

    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn admin(&self) -> &AdminCredentials {
        &self.admin
    }

    pub const fn cloudinary(&self) -> &CloudinaryConfig {
        &self.cloudinary
    }

    pub fn news_collection(&self) -> &str {
        &self.news_collection
    }
}
