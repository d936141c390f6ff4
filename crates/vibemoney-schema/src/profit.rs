use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{Symbol, ValidationError};

/// Reference point for a profit calculation.
///
/// Date-only input resolves to midnight UTC of that day; datetimes without an offset are
/// taken as UTC. With an offset, `day` is the calendar day in that offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsOf {
    pub day: NaiveDate,
    pub at: DateTime<Utc>,
}

impl AsOf {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();

        if let Ok(day) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            let at = day.and_time(NaiveTime::MIN).and_utc();
            return Ok(Self { day, at });
        }

        // the day is taken in the caller's own offset
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self {
                day: dt.date_naive(),
                at: dt.with_timezone(&Utc),
            });
        }

        let at = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| ValidationError::InvalidAsOf {
                value: input.to_owned(),
            })?;

        Ok(Self {
            day: at.date_naive(),
            at,
        })
    }
}

/// Price change of a symbol since a reference date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "symbol": "AAPL",
    "as_of": "2024-01-15T00:00:00Z",
    "price_then": 186.22,
    "price_now": 221.14,
    "profit": 34.92
}))]
pub struct ProfitResponse {
    #[schema(value_type = String, example = "AAPL")]
    pub symbol: Symbol,
    /// Normalized reference timestamp
    pub as_of: DateTime<Utc>,
    /// Close price on the reference day
    pub price_then: Option<f64>,
    /// Most recent close price
    pub price_now: Option<f64>,
    /// `price_now - price_then`
    pub profit: Option<f64>,
}
