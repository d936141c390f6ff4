use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::Symbol;

/// Category of a timestamped record associated with a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    News,
    Earnings,
    Dividend,
    Split,
    Filing,
    Other,
}

/// News item or corporate action.
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "published_at": "2025-01-30T21:30:00Z",
///     "event_type": "earnings",
///     "title": "Apple reports first quarter results",
///     "summary": null,
///     "source": "Apple Newsroom",
///     "url": "https://www.apple.com/newsroom/"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatestEvent {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub published_at: DateTime<Utc>,
    pub event_type: EventType,
    /// Headline
    pub title: String,
    pub summary: Option<String>,
    /// Publisher
    pub source: Option<String>,
    pub url: Option<String>,
}

/// Latest events for one symbol, newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LatestEventsResponse {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub events: Vec<LatestEvent>,
}
