use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Label by the sign of an average sentiment score.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// Aggregated news sentiment for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SentimentItem {
    #[schema(value_type = String, example = "AAPL")]
    pub ticker: Symbol,
    pub article_count: usize,
    pub avg_sentiment: Option<f64>,
    pub label: Option<SentimentLabel>,
    /// Whether the average reached the threshold; false when no score was found
    pub good: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SentimentResponse {
    #[schema(value_type = Vec<String>)]
    pub tickers: Vec<Symbol>,
    /// Score threshold used for `good`
    pub used_threshold: f64,
    pub results: Vec<SentimentItem>,
}
