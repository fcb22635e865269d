// src/upstream.rs
//! Outbound call to the news-sentiment API and classification of what came back.

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::http::StatusCode;
use metrics::histogram;
use reqwest::Client;
use serde_json::Value;
use std::time::Instant;

use crate::config::ProxyConfig;
use crate::error::ProxyError;
use crate::news::NewsQuery;

/// What a single outbound call ended in.
#[derive(Debug)]
pub enum UpstreamOutcome {
    Timeout,
    TransportFailure(String),
    HttpStatus(StatusCode),
    Parsed { raw: Bytes, json: Value },
    /// 200 with a body that is not JSON.
    Malformed(String),
}

/// Successful upstream payload, relayed byte-for-byte.
#[derive(Debug, Clone)]
pub struct NewsPayload {
    pub raw: Bytes,
    pub article_count: usize,
}

#[derive(Clone)]
pub struct NewsClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(cfg: &ProxyConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(cfg.timeout)
            .build()
            .context("building upstream http client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
        })
    }

    /// One GET, no retries. Never fails; every failure is a tagged outcome.
    pub async fn fetch(&self, query: &NewsQuery) -> UpstreamOutcome {
        let t0 = Instant::now();
        let outcome = self.fetch_inner(query).await;
        histogram!("news_proxy_upstream_ms").record(t0.elapsed().as_secs_f64() * 1_000.0);
        outcome
    }

    async fn fetch_inner(&self, query: &NewsQuery) -> UpstreamOutcome {
        let resp = match self
            .http
            .get(&self.base_url)
            .query(&query.upstream_params(&self.api_key)[..])
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => return transport_outcome(e),
        };

        let status = resp.status();
        if status != StatusCode::OK {
            return UpstreamOutcome::HttpStatus(status);
        }

        let raw = match resp.bytes().await {
            Ok(b) => b,
            Err(e) => return transport_outcome(e),
        };

        match serde_json::from_slice::<Value>(&raw) {
            Ok(json) => UpstreamOutcome::Parsed { raw, json },
            Err(e) => UpstreamOutcome::Malformed(e.to_string()),
        }
    }
}

// The client timeout also covers reading the body, so both call sites route here.
fn transport_outcome(e: reqwest::Error) -> UpstreamOutcome {
    if e.is_timeout() {
        UpstreamOutcome::Timeout
    } else {
        UpstreamOutcome::TransportFailure(e.to_string())
    }
}

/// Map an outcome to the proxy result. Order: timeout, transport, status,
/// `Error Message`, `Note`, success.
pub fn classify(outcome: UpstreamOutcome) -> Result<NewsPayload, ProxyError> {
    match outcome {
        UpstreamOutcome::Timeout => Err(ProxyError::Timeout),
        UpstreamOutcome::TransportFailure(reason) => Err(ProxyError::Transport(reason)),
        UpstreamOutcome::HttpStatus(code) => Err(ProxyError::UpstreamHttp(code)),
        UpstreamOutcome::Malformed(reason) => Err(ProxyError::Internal(reason)),
        UpstreamOutcome::Parsed { raw, json } => {
            let Some(obj) = json.as_object() else {
                return Err(ProxyError::Internal(format!(
                    "upstream body is not a JSON object: {raw_len} bytes",
                    raw_len = raw.len()
                )));
            };
            if let Some(msg) = obj.get("Error Message") {
                return Err(ProxyError::UpstreamApi(msg.clone()));
            }
            if let Some(note) = obj.get("Note") {
                return Err(ProxyError::RateLimited(note.clone()));
            }
            let article_count = match obj.get("feed") {
                None => 0,
                Some(Value::Array(items)) => items.len(),
                Some(_) => {
                    return Err(ProxyError::Internal(
                        "upstream `feed` is not an array".to_string(),
                    ))
                }
            };
            Ok(NewsPayload { raw, article_count })
        }
    }
}
