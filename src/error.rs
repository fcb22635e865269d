// src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};

/// Every failure a news request can end in. Rendered as `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("API timeout")]
    Timeout,
    #[error("Request failed")]
    Transport(String),
    #[error("API error: {}", .0.as_u16())]
    UpstreamHttp(StatusCode),
    /// 200 from upstream, but the body carried `Error Message`.
    #[error("{0}")]
    UpstreamApi(Value),
    /// 200 from upstream, but the body carried a soft quota `Note`.
    #[error("{0}")]
    RateLimited(Value),
    #[error("Internal server error")]
    Internal(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::UpstreamHttp(code) => *code,
            ProxyError::UpstreamApi(_) => StatusCode::BAD_REQUEST,
            ProxyError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label used for logs and the request counter.
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::Timeout => "timeout",
            ProxyError::Transport(_) => "transport",
            ProxyError::UpstreamHttp(_) => "upstream_http",
            ProxyError::UpstreamApi(_) => "upstream_api",
            ProxyError::RateLimited(_) => "rate_limited",
            ProxyError::Internal(_) => "internal",
        }
    }

    /// Value placed under `"error"`. Upstream messages are relayed as received.
    pub fn body(&self) -> Value {
        match self {
            ProxyError::UpstreamApi(v) | ProxyError::RateLimited(v) => v.clone(),
            other => Value::String(other.to_string()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.body() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_messages_match_envelope_text() {
        assert_eq!(ProxyError::Timeout.body(), json!("API timeout"));
        assert_eq!(
            ProxyError::Transport("refused".into()).body(),
            json!("Request failed")
        );
        assert_eq!(
            ProxyError::UpstreamHttp(StatusCode::SERVICE_UNAVAILABLE).body(),
            json!("API error: 503")
        );
        assert_eq!(
            ProxyError::Internal("boom".into()).body(),
            json!("Internal server error")
        );
    }

    #[test]
    fn upstream_messages_are_relayed_verbatim() {
        let e = ProxyError::UpstreamApi(json!("Invalid API call."));
        assert_eq!(e.body(), json!("Invalid API call."));
        assert_eq!(e.status(), StatusCode::BAD_REQUEST);

        let n = ProxyError::RateLimited(json!("Thank you for using Alpha Vantage!"));
        assert_eq!(n.body(), json!("Thank you for using Alpha Vantage!"));
        assert_eq!(n.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn http_error_keeps_upstream_status() {
        let e = ProxyError::UpstreamHttp(StatusCode::NOT_FOUND);
        assert_eq!(e.status(), StatusCode::NOT_FOUND);
        assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    }
}
