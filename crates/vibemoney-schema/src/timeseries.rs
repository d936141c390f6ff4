use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Interval, Symbol};

/// Single OHLCV observation.
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "interval": "1d",
///     "timestamp": "2025-01-02T00:00:00Z",
///     "open": 248.93,
///     "high": 249.10,
///     "low": 241.82,
///     "close": 243.85,
///     "volume": 55740731
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSeriesPoint {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub interval: Interval,
    /// Observation time in UTC
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Time series for one symbol, oldest observation first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimeSeriesResponse {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    pub interval: Interval,
    pub points: Vec<TimeSeriesPoint>,
}
