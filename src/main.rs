// src/main.rs
use anyhow::Result;
use campus_core::application::{
    ports::{security::TokenManager, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, ServiceDependencies},
};
use campus_core::config::AppConfig;
use campus_core::domain::{
    listing::{ListingReadRepository, ListingWriteRepository},
    relation::RelationRepository,
    slug::SlugStore,
};
use campus_core::infrastructure::{
    database,
    repositories::{
        PostgresListingReadRepository, PostgresListingWriteRepository, PostgresRelationRepository,
        PostgresSlugStore,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use campus_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
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

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let listing_write_repo: Arc<dyn ListingWriteRepository> =
        Arc::new(PostgresListingWriteRepository::new(pool.clone()));
    let listing_read_repo: Arc<dyn ListingReadRepository> =
        Arc::new(PostgresListingReadRepository::new(pool.clone()));
    let slug_store: Arc<dyn SlugStore> = Arc::new(PostgresSlugStore::new(pool.clone()));
    let relation_repo: Arc<dyn RelationRepository> =
        Arc::new(PostgresRelationRepository::new(pool));

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        listing_write_repo,
        listing_read_repo,
        slug_store,
        relation_repo,
        token_manager,
        clock,
        slugger,
        max_slug_attempts: config.slug_max_attempts(),
    }));

    let app = build_router(
        HttpState { services },
        RouterOptions {
            allowed_origins: config.allowed_origins().to_vec(),
            rate_limit: config.rate_limit_enabled(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
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
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
