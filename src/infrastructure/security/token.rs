// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedAdmin, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    fmt::Write as _,
    sync::Arc,
    time::{Duration, SystemTime},
};

/// Issues and verifies Ed25519-signed biscuit tokens for the admin account.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn escape_datalog(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn token_source(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> (String, HashMap<String, Term>) {
    let params = HashMap::from([
        ("uname".to_owned(), Term::from(subject.username.clone())),
        ("issued".to_owned(), Term::from(issued_at)),
        ("exp".to_owned(), Term::from(expires_at)),
    ]);

    let mut code = String::from(
        r#"
        user({uname});
        issued_at({issued});
        expires_at({exp});
        token_type("access");
        check if time($now), $now >= {issued};
        check if time($now), $now <= {exp};
        check if token_type("access");
        "#,
    );

    // Capability names come from configuration, not user input, but are
    // escaped all the same since they land inside a string literal.
    for cap in &subject.capabilities {
        let _ = writeln!(
            code,
            r#"right("{}", "{}");"#,
            escape_datalog(&cap.resource),
            escape_datalog(&cap.action)
        );
    }

    (code, params)
}

fn seal(
    code: &str,
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    Biscuit::builder()
        .code_with_params(code, params, HashMap::new())
        .and_then(|builder| builder.build(root))
        .and_then(|token| token.seal())
        .and_then(|sealed| sealed.to_base64())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

fn expires_in_seconds(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX)
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;
        let (code, params) = token_source(&subject, issued_at, expires_at);

        Ok(AuthTokenDto {
            token: seal(&code, params, self.root.as_ref())?,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: expires_in_seconds(self.ttl),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedAdmin> {
        let unauthorized = |err: biscuit_auth::error::Token| {
            tracing::debug!(error = %err, "token rejected");
            ApplicationError::unauthorized("invalid or expired token")
        };

        let biscuit = Biscuit::from_base64(token, self.public).map_err(unauthorized)?;

        let mut authorizer = AuthorizerBuilder::new()
            .time()
            .code("allow if user($name);")
            .and_then(|builder| builder.build(&biscuit))
            .map_err(unauthorized)?;
        authorizer.authorize().map_err(unauthorized)?;

        let (facts, _, _, _) = authorizer.dump();
        super::claims::parse_claims(facts)
    }
}
