//! Service layer.
//!
//! Every resource is served through a provider capability (`[provider]`) and a service
//! function that enforces the response invariants on whatever the provider returned:
//!
//! 1. ordering - time series oldest first, events newest first, quarters by fiscal period.
//! 2. bounds - the caller's `Limit` is applied after sorting.
//! 3. derived values - profit, revision signals and sentiment labels.
//!
//! `[StubProvider]` is the only provider shipped today; it serves empty data.

pub mod error;
pub mod estimates;
pub mod latestevents;
pub mod profit;
pub mod provider;
pub mod quarterly;
pub mod sentiment;
pub mod stub;
pub mod timeseries;

pub use error::ProviderError;
pub use provider::{
    EstimateRecord, EstimatesProvider, LatestEventsProvider, NewsArticle, PriceProvider,
    Providers, QuarterlyProvider, SentimentProvider, TickerSentiment, TimeSeriesProvider,
    TimeSeriesQuery,
};
pub use stub::StubProvider;
