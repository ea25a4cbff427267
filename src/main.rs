//! Banana budget HTTP service binary.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use banana_budget::{app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("banana_budget=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env()?;

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app()).await.context("server error")?;

    Ok(())
}
