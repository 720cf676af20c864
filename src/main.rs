use dotenvy::dotenv;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use mergington::web::build_router;
use mergington::{ActivityRegistry, AppConfig, ConfigError};

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // .env is optional
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Config + registry
    let config = AppConfig::from_env()?;
    let registry = ActivityRegistry::seeded();
    info!(activities = registry.len(), "activity registry seeded");

    // 3. Router
    let app = build_router(registry, &config.static_dir);

    // 4. Bind, with one fallback port
    let listener = match tokio::net::TcpListener::bind(config.addr()).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.fallback_addr() else {
                return Err(e.into());
            };
            warn!(
                "could not bind {}: {}; trying fallback {}",
                config.addr(),
                e,
                fallback
            );
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);
    info!(
        "open http://{}/static/index.html to sign up",
        bound_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
