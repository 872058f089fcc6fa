use anyhow::Result;
use newsroom_core::{
    application::{
        ports::{
            assets::AssetStore,
            security::{AccessGate, PasswordHasher, TokenManager},
        },
        services::ApplicationServices,
    },
    config::AppConfig,
    domain::store::DocumentStore,
    infrastructure::{
        assets::CloudinaryAssetStore,
        database,
        security::{
            gate::TokenAccessGate, password::Argon2PasswordHasher, token::BiscuitTokenManager,
        },
        stores::{InMemoryDocumentStore, SqliteDocumentStore},
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let store = open_store(&config).await?;
    let assets: Arc<dyn AssetStore> =
        Arc::new(CloudinaryAssetStore::new(config.cloudinary().clone())?);

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let access_gate: Arc<dyn AccessGate> =
        Arc::new(TokenAccessGate::new(Arc::clone(&token_manager)));

    let services = Arc::new(ApplicationServices::new(
        store,
        config.news_collection(),
        assets,
        config.admin().clone(),
        password_hasher,
        token_manager,
        access_gate,
    ));

    let state = HttpState { services };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(collection = config.news_collection(), "listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    if config.uses_memory_store() {
        tracing::warn!("using the in-memory document store; data is lost on exit");
        return Ok(Arc::new(InMemoryDocumentStore::new()));
    }

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    Ok(Arc::new(SqliteDocumentStore::new(Arc::new(pool))))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
