// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod news;
pub mod sample;
pub mod upstream;

pub use crate::api::{router, AppState};
pub use crate::config::ProxyConfig;
pub use crate::error::ProxyError;

use axum::Router;

/// Full application: proxy routes plus `/metrics`.
pub fn app(config: ProxyConfig) -> anyhow::Result<Router> {
    let metrics = crate::metrics::Metrics::init()?;
    let state = AppState::new(config)?;
    Ok(router(state).merge(metrics.router()))
}
