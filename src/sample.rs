// src/sample.rs
use serde_json::{json, Value};

pub const SENTIMENT_SCORE_DEFINITION: &str = "x <= -0.35: Bearish; -0.35 < x <= -0.15: Somewhat-Bearish; -0.15 < x < 0.15: Neutral; 0.15 <= x < 0.35: Somewhat_Bullish; x >= 0.35: Bullish";

/// Fixed two-article payload shaped like a real NEWS_SENTIMENT response.
/// Lets clients integrate without spending upstream quota.
pub fn test_news() -> Value {
    json!({
        "feed": [
            {
                "title": "Test Article 1",
                "summary": "This is a test article for the news API proxy",
                "source": "Test Source",
                "time_published": "20251104T160000",
                "url": "https://example.com/test1",
                "overall_sentiment_score": 0.5,
                "overall_sentiment_label": "Neutral"
            },
            {
                "title": "Test Article 2",
                "summary": "Another test article for verification",
                "source": "Test Source 2",
                "time_published": "20251104T150000",
                "url": "https://example.com/test2",
                "overall_sentiment_score": 0.7,
                "overall_sentiment_label": "Positive"
            }
        ],
        "sentiment_score_definition": SENTIMENT_SCORE_DEFINITION
    })
}
