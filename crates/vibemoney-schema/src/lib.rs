//! Response shapes and validated request types shared by the service and web crates.

pub mod domain;
pub mod error;
pub mod estimates;
pub mod latestevents;
pub mod profit;
pub mod quarterly;
pub mod sentiment;
pub mod timeseries;

pub use domain::{FiscalPeriod, Interval, Limit, LimitBounds, Symbol};
pub use error::ValidationError;
pub use estimates::{
    EstimatePeriod, EstimatePoint, EstimatesResponse, ReportPeriod, RevisionSign, RevisionSignal,
};
pub use latestevents::{EventType, LatestEvent, LatestEventsResponse};
pub use profit::{AsOf, ProfitResponse};
pub use quarterly::{QuarterlyFundamentals, QuarterlyResponse};
pub use sentiment::{SentimentItem, SentimentLabel, SentimentResponse};
pub use timeseries::{TimeSeriesPoint, TimeSeriesResponse};
