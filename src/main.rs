//! News sentiment proxy: binary entrypoint.
//! Loads configuration, installs tracing, and serves the Axum router.

use anyhow::Context;
use news_sentiment_proxy::{app, ProxyConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact logs by default; JSON lines when NEWS_PROXY_LOG_JSON=1.
fn init_tracing() {
    let json = std::env::var("NEWS_PROXY_LOG_JSON")
        .ok()
        .is_some_and(|v| v == "1");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_sentiment_proxy=info,tower_http=warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when the file is absent.
    let _ = dotenvy::dotenv();

    init_tracing();

    let config = ProxyConfig::from_env().context("loading proxy configuration")?;
    info!(
        "Alpha Vantage API key: {} (only first 8 and last 4 chars shown)",
        config.masked_key()
    );
    if config.key_configured() {
        info!("API key status: configured");
    } else {
        warn!("API key status: placeholder 'demo' in use");
    }

    let bind_addr = config.bind_addr;
    let router = app(config)?;

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("binding {bind_addr}"))?;
    info!(%bind_addr, "Starting Alpha Vantage News API Proxy");

    axum::serve(listener, router).await.context("serving http")?;
    Ok(())
}
