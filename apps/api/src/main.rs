mod config;
mod errors;
mod headline_client;
mod models;
mod password;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::headline_client::HeadlineClient;
use crate::password::word_pools::synthetic_entropy_bits;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting mnemopass API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize headline client
    let headlines = HeadlineClient::new(config.headline_feed_url.clone(), config.headline_timeout)?;
    info!(
        "Headline client initialized (timeout: {}s)",
        config.headline_timeout.as_secs()
    );

    info!(
        "Password policy: length {}..={} (default {}), word margin {}; synthetic fallback carries {:.1} bits",
        config.policy.min_length,
        config.policy.max_length,
        config.policy.default_length,
        config.policy.word_margin,
        synthetic_entropy_bits()
    );

    let state = AppState {
        headlines: Arc::new(headlines),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
