// src/news.rs
//! Inbound news query: defaults, overrides and the outbound parameter list.

use serde::Deserialize;

pub const UPSTREAM_FUNCTION: &str = "NEWS_SENTIMENT";

pub const DEFAULT_TICKERS: &str = "NVDA,TSLA,AAPL,MSFT,GOOGL,AMZN,META,BTC,ETH,SPY,QQQ";
pub const DEFAULT_TOPICS: &str =
    "financial_markets,earnings,ipo,mergers_and_acquisitions,technology";
pub const DEFAULT_LIMIT: &str = "10";

/// Raw query string as received. Any subset may be absent.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct NewsParams {
    pub tickers: Option<String>,
    pub topics: Option<String>,
    pub limit: Option<String>,
}

impl NewsParams {
    /// Fold raw query pairs. First occurrence of a key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut out = Self::default();
        for (k, v) in pairs {
            let slot = match k.as_str() {
                "tickers" => &mut out.tickers,
                "topics" => &mut out.topics,
                "limit" => &mut out.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(v);
            }
        }
        out
    }
}

/// Query after defaults are filled in. Values are not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub tickers: String,
    pub topics: String,
    pub limit: String,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            tickers: DEFAULT_TICKERS.to_string(),
            topics: DEFAULT_TOPICS.to_string(),
            limit: DEFAULT_LIMIT.to_string(),
        }
    }
}

impl From<NewsParams> for NewsQuery {
    /// A supplied value replaces the default outright (even when empty).
    fn from(p: NewsParams) -> Self {
        let d = NewsQuery::default();
        Self {
            tickers: p.tickers.unwrap_or(d.tickers),
            topics: p.topics.unwrap_or(d.topics),
            limit: p.limit.unwrap_or(d.limit),
        }
    }
}

impl NewsQuery {
    /// Outbound query pairs, including the API key.
    pub fn upstream_params<'a>(&'a self, api_key: &'a str) -> [(&'static str, &'a str); 5] {
        [
            ("function", UPSTREAM_FUNCTION),
            ("tickers", self.tickers.as_str()),
            ("topics", self.topics.as_str()),
            ("limit", self.limit.as_str()),
            ("apikey", api_key),
        ]
    }
}
