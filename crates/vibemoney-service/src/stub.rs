use async_trait::async_trait;
use chrono::NaiveDate;
use vibemoney_schema::{LatestEvent, Limit, QuarterlyFundamentals, Symbol, TimeSeriesPoint};

use crate::provider::*;
use crate::ProviderError;

/// Placeholder provider: every lookup succeeds with no data.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubProvider;

#[async_trait]
impl TimeSeriesProvider for StubProvider {
    async fn time_series(
        &self,
        _query: &TimeSeriesQuery,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        Ok(vec![])
    }
}

#[async_trait]
impl QuarterlyProvider for StubProvider {
    async fn quarterly(
        &self,
        _symbol: &Symbol,
    ) -> Result<Vec<QuarterlyFundamentals>, ProviderError> {
        Ok(vec![])
    }
}

#[async_trait]
impl LatestEventsProvider for StubProvider {
    async fn latest_events(
        &self,
        _symbol: &Symbol,
        _limit: Limit,
    ) -> Result<Vec<LatestEvent>, ProviderError> {
        Ok(vec![])
    }
}

#[async_trait]
impl PriceProvider for StubProvider {
    async fn close_on(
        &self,
        _symbol: &Symbol,
        _day: NaiveDate,
    ) -> Result<Option<f64>, ProviderError> {
        Ok(None)
    }

    async fn latest_close(&self, _symbol: &Symbol) -> Result<Option<f64>, ProviderError> {
        Ok(None)
    }
}

#[async_trait]
impl EstimatesProvider for StubProvider {
    async fn estimates(&self, _symbol: &Symbol) -> Result<Vec<EstimateRecord>, ProviderError> {
        Ok(vec![])
    }
}

#[async_trait]
impl SentimentProvider for StubProvider {
    async fn news_feed(
        &self,
        _ticker: &Symbol,
        _limit: Limit,
    ) -> Result<Vec<NewsArticle>, ProviderError> {
        Ok(vec![])
    }
}
