use crate::config::BakeryConfig;
use crate::database::BakeryRepository;
use crate::database::seed::seed_if_empty;
use crate::database::sqlite::SqliteRepository;
use anyhow::Context;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
mod database;
mod domain;
mod error;
mod features;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BakeryRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();

    let config = BakeryConfig::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        seed_database = config.seed_database,
        "loaded configuration"
    );

    // connect to our db and run migrations
    let pool = database::connect(&config.database_url, config.max_connections).await?;

    if config.seed_database {
        seed_if_empty(&pool).await?;
    }

    let app_state = AppState {
        repo: Arc::new(SqliteRepository::new(pool.clone())),
    };

    let app = features::app_router()
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Server listening on http://{}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Server stopped.");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
