use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::metrics::record_outcome;
use crate::news::{NewsParams, NewsQuery};
use crate::sample;
use crate::upstream::{classify, NewsClient};

pub const SERVICE_NAME: &str = "Alpha Vantage News API Proxy";

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ProxyConfig>,
    pub client: NewsClient,
}

impl AppState {
    pub fn new(config: ProxyConfig) -> anyhow::Result<Self> {
        let client = NewsClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/news", get(news))
        .route("/api/news", get(news))
        .route("/news/test", get(test_news))
        .route("/api/news/test", get(test_news))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResp {
    status: &'static str,
    service: &'static str,
    timestamp: String,
    alpha_vantage_key_configured: bool,
}

async fn health(State(state): State<AppState>) -> Json<HealthResp> {
    Json(HealthResp {
        status: "healthy",
        service: SERVICE_NAME,
        timestamp: chrono::Utc::now().to_rfc3339(),
        alpha_vantage_key_configured: state.config.key_configured(),
    })
}

// Raw pairs instead of a typed struct: a repeated key must not reject the request.
async fn news(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = NewsQuery::from(NewsParams::from_pairs(pairs));
    info!(tickers = %query.tickers, "Calling Alpha Vantage API");

    let outcome = state.client.fetch(&query).await;
    match classify(outcome) {
        Ok(payload) => {
            info!(
                articles = payload.article_count,
                "Successfully fetched news articles"
            );
            record_outcome("ok");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                payload.raw,
            )
                .into_response()
        }
        Err(e) => {
            log_failure(&e);
            record_outcome(e.kind());
            e.into_response()
        }
    }
}

fn log_failure(e: &ProxyError) {
    match e {
        ProxyError::RateLimited(note) => warn!(%note, "Alpha Vantage API note"),
        ProxyError::Transport(reason) | ProxyError::Internal(reason) => {
            error!(kind = e.kind(), %reason, "news request failed")
        }
        other => error!(kind = other.kind(), error = %other, "Alpha Vantage API error"),
    }
}

async fn test_news() -> Json<serde_json::Value> {
    info!("Returning test news data");
    Json(sample::test_news())
}
