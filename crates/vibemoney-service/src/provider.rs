use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use vibemoney_schema::{
    Interval, LatestEvent, Limit, QuarterlyFundamentals, ReportPeriod, Symbol, TimeSeriesPoint,
};

use crate::{ProviderError, StubProvider};

/// Parameters of a time series lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesQuery {
    pub symbol: Symbol,
    pub interval: Interval,
    pub limit: Limit,
}

/// One analyst-estimate row as a provider reports it, revision history included.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRecord {
    pub fiscal_date_ending: Option<NaiveDate>,
    pub period: ReportPeriod,
    pub quarter: Option<String>,
    pub eps_avg: Option<f64>,
    pub eps_low: Option<f64>,
    pub eps_high: Option<f64>,
    pub eps_num_analysts: Option<u32>,
    pub revenue_avg: Option<f64>,
    pub revenue_low: Option<f64>,
    pub revenue_high: Option<f64>,
    pub revenue_num_analysts: Option<u32>,
    /// Successive EPS consensus values, oldest first
    pub eps_history: Vec<f64>,
    /// Successive revenue consensus values, oldest first
    pub revenue_history: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub ticker_sentiment: Vec<TickerSentiment>,
}

/// Per-ticker score attached to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerSentiment {
    pub ticker: String,
    pub relevance_score: f64,
    pub sentiment_score: f64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait]
pub trait TimeSeriesProvider: Send + Sync {
    /// Observations for the query; order and length are not trusted by callers.
    async fn time_series(
        &self,
        query: &TimeSeriesQuery,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError>;
}

#[async_trait]
pub trait QuarterlyProvider: Send + Sync {
    async fn quarterly(&self, symbol: &Symbol)
        -> Result<Vec<QuarterlyFundamentals>, ProviderError>;
}

#[async_trait]
pub trait LatestEventsProvider: Send + Sync {
    async fn latest_events(
        &self,
        symbol: &Symbol,
        limit: Limit,
    ) -> Result<Vec<LatestEvent>, ProviderError>;
}

#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Close price of the last bar on `day`, if the market traded.
    async fn close_on(&self, symbol: &Symbol, day: NaiveDate) -> Result<Option<f64>, ProviderError>;

    /// Most recent close price.
    async fn latest_close(&self, symbol: &Symbol) -> Result<Option<f64>, ProviderError>;
}

#[async_trait]
pub trait EstimatesProvider: Send + Sync {
    /// Estimate rows, most recent period first within each `ReportPeriod`.
    async fn estimates(&self, symbol: &Symbol) -> Result<Vec<EstimateRecord>, ProviderError>;
}

#[async_trait]
pub trait SentimentProvider: Send + Sync {
    async fn news_feed(
        &self,
        ticker: &Symbol,
        limit: Limit,
    ) -> Result<Vec<NewsArticle>, ProviderError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////

/// The set of provider capabilities the application was built with.
#[derive(Clone)]
pub struct Providers {
    pub timeseries: Arc<dyn TimeSeriesProvider>,
    pub quarterly: Arc<dyn QuarterlyProvider>,
    pub latest_events: Arc<dyn LatestEventsProvider>,
    pub prices: Arc<dyn PriceProvider>,
    pub estimates: Arc<dyn EstimatesProvider>,
    pub sentiment: Arc<dyn SentimentProvider>,
}

impl Providers {
    /// Every capability served by `[StubProvider]`.
    pub fn stub() -> Self {
        let stub = Arc::new(StubProvider);
        Self {
            timeseries: stub.clone(),
            quarterly: stub.clone(),
            latest_events: stub.clone(),
            prices: stub.clone(),
            estimates: stub.clone(),
            sentiment: stub,
        }
    }

    pub fn with_timeseries(mut self, provider: Arc<dyn TimeSeriesProvider>) -> Self {
        self.timeseries = provider;
        self
    }

    pub fn with_quarterly(mut self, provider: Arc<dyn QuarterlyProvider>) -> Self {
        self.quarterly = provider;
        self
    }

    pub fn with_latest_events(mut self, provider: Arc<dyn LatestEventsProvider>) -> Self {
        self.latest_events = provider;
        self
    }

    pub fn with_prices(mut self, provider: Arc<dyn PriceProvider>) -> Self {
        self.prices = provider;
        self
    }

    pub fn with_estimates(mut self, provider: Arc<dyn EstimatesProvider>) -> Self {
        self.estimates = provider;
        self
    }

    pub fn with_sentiment(mut self, provider: Arc<dyn SentimentProvider>) -> Self {
        self.sentiment = provider;
        self
    }
}

impl Default for Providers {
    fn default() -> Self {
        Self::stub()
    }
}
