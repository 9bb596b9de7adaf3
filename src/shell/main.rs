use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use events_api::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use events_api::shell::config::AppConfig;
use events_api::shell::http::router;
use events_api::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "events_api=debug,tower_http=debug".into()),
        )
        .with(fmt::layer())
        .init();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let event_store = Arc::new(if config.seed {
        InMemoryEventStore::seeded()
    } else {
        InMemoryEventStore::new()
    });
    let app = router(AppState::new(event_store));

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    tracing::info!("Events API: http://{}", config.addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
}
