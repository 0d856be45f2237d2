use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use shipment_trackings::modules::trackings::adapters::outbound::tracking_store_in_memory::InMemoryTrackingStore;
use shipment_trackings::shared::core::clock::SystemClock;
use shipment_trackings::shell::config::Config;
use shipment_trackings::shell::http::router;
use shipment_trackings::shell::state::AppState;
use shipment_trackings::shell::workers::{EXPIRY_SWEEP_INTERVAL, spawn_expiry_sweeper};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    // In-memory store, records live for a day
    let store = Arc::new(InMemoryTrackingStore::new(Arc::new(SystemClock)));
    spawn_expiry_sweeper(store.clone(), EXPIRY_SWEEP_INTERVAL);

    let app = router(AppState::new(store));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server is running at http://localhost:{}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
