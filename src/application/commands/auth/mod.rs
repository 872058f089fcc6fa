// src/application/commands/auth/mod.rs
use std::sync::Arc;

use crate::application::{
    dto::{AuthTokenDto, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::{PasswordHasher, TokenManager},
};

/// The single administrator account, configured at startup.
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password_hash: String,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

pub struct AuthCommandService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn TokenManager>,
}

impl AuthCommandService {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_manager,
        }
    }

    pub async fn login(&self, command: LoginCommand) -> ApplicationResult<AuthTokenDto> {
        // Verify even on a username mismatch so both failures cost the same.
        let username_matches = command.username == self.credentials.username;
        let verified = self
            .password_hasher
            .verify(&command.password, &self.credentials.password_hash)
            .await;

        match verified {
            Ok(()) if username_matches => {
                tracing::info!(admin = %command.username, "admin logged in");
                self.token_manager
                    .issue(TokenSubject::administrator(command.username))
                    .await
            }
            Ok(()) | Err(ApplicationError::Unauthorized(_)) => {
                tracing::warn!(username = %command.username, "rejected admin login");
                Err(ApplicationError::unauthorized("invalid username or password"))
            }
            Err(other) => Err(other),
        }
    }
}
