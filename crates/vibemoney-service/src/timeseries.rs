use log::debug;
use vibemoney_schema::TimeSeriesResponse;

use crate::{ProviderError, TimeSeriesProvider, TimeSeriesQuery};

/// Fetch a time series, oldest point first, keeping only the most recent `limit` points.
pub async fn time_series(
    provider: &dyn TimeSeriesProvider,
    query: &TimeSeriesQuery,
) -> Result<TimeSeriesResponse, ProviderError> {
    let mut points = provider.time_series(query).await?;
    debug!(
        "[{}] {} time series points received for interval {}",
        query.symbol,
        points.len(),
        query.interval
    );

    points.sort_by_key(|point| point.timestamp);
    let excess = points.len().saturating_sub(query.limit.get());
    points.drain(..excess);

    Ok(TimeSeriesResponse {
        symbol: query.symbol.clone(),
        interval: query.interval,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StubProvider;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use vibemoney_schema::{Interval, LimitBounds, Symbol, TimeSeriesPoint};

    struct Fixed(Vec<TimeSeriesPoint>);

    #[async_trait]
    impl TimeSeriesProvider for Fixed {
        async fn time_series(
            &self,
            _query: &TimeSeriesQuery,
        ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    fn point(day: u32) -> TimeSeriesPoint {
        TimeSeriesPoint {
            symbol: Symbol::parse("AAPL").unwrap(),
            interval: Interval::OneDay,
            timestamp: Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap(),
            open: day as f64,
            high: day as f64,
            low: day as f64,
            close: day as f64,
            volume: 1_000,
        }
    }

    fn query(limit: i64) -> TimeSeriesQuery {
        TimeSeriesQuery {
            symbol: Symbol::parse("aapl").unwrap(),
            interval: Interval::OneDay,
            limit: LimitBounds::TIMESERIES.resolve(Some(limit)).unwrap(),
        }
    }

    #[tokio::test]
    async fn stub_yields_empty_series() {
        let response = time_series(&StubProvider, &query(5)).await.unwrap();
        assert_eq!(response.symbol.as_str(), "AAPL");
        assert_eq!(response.interval, Interval::OneDay);
        assert!(response.points.is_empty());
    }

    #[tokio::test]
    async fn sorts_oldest_first() {
        let provider = Fixed(vec![point(3), point(1), point(2)]);
        let response = time_series(&provider, &query(10)).await.unwrap();
        let days: Vec<f64> = response.points.iter().map(|p| p.close).collect();
        assert_eq!(days, vec![1.0, 2.0, 3.0]);
    }

    #[tokio::test]
    async fn limit_keeps_most_recent_points() {
        let provider = Fixed((1..=9).rev().map(point).collect());
        let response = time_series(&provider, &query(3)).await.unwrap();
        let days: Vec<f64> = response.points.iter().map(|p| p.close).collect();
        assert_eq!(days, vec![7.0, 8.0, 9.0]);
    }

    #[tokio::test]
    async fn provider_failure_propagates() {
        struct Down;

        #[async_trait]
        impl TimeSeriesProvider for Down {
            async fn time_series(
                &self,
                _query: &TimeSeriesQuery,
            ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
                Err(ProviderError::Unavailable {
                    provider: "down",
                    reason: "maintenance".into(),
                })
            }
        }

        let err = time_series(&Down, &query(3)).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable { .. }));
    }
}
