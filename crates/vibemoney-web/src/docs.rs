use utoipa::OpenApi;
use vibemoney_schema::{
    EstimatePeriod, EstimatePoint, EstimatesResponse, EventType, Interval, LatestEvent,
    LatestEventsResponse, ProfitResponse, QuarterlyFundamentals, QuarterlyResponse, ReportPeriod,
    RevisionSign, RevisionSignal, SentimentItem, SentimentLabel, SentimentResponse,
    TimeSeriesPoint, TimeSeriesResponse,
};

use crate::api::{self, meta};
use crate::{ErrorBody, Settings};

#[derive(OpenApi)]
#[openapi(
    paths(meta::root, meta::health),
    components(schemas(meta::ServiceInfo, meta::Health, ErrorBody)),
    tags((name = "meta", description = "Service metadata and health"))
)]
struct MetaDoc;

/// Versioned endpoints; paths are relative to the API prefix.
#[derive(OpenApi)]
#[openapi(
    paths(
        api::timeseries::timeseries,
        api::quarterly::quarterly,
        api::latestevents::latest_events,
        api::profit::profit,
        api::estimates::estimates,
        api::sentiment::sentiment,
    ),
    components(schemas(
        Interval,
        TimeSeriesPoint,
        TimeSeriesResponse,
        QuarterlyFundamentals,
        QuarterlyResponse,
        EventType,
        LatestEvent,
        LatestEventsResponse,
        ProfitResponse,
        EstimatePeriod,
        ReportPeriod,
        RevisionSign,
        RevisionSignal,
        EstimatePoint,
        EstimatesResponse,
        SentimentLabel,
        SentimentItem,
        SentimentResponse,
        ErrorBody,
    )),
    tags(
        (name = "timeseries", description = "Price history"),
        (name = "quarterly", description = "Quarterly fundamentals"),
        (name = "latestevents", description = "News and corporate events"),
        (name = "profit", description = "Price change since a date"),
        (name = "estimates", description = "Analyst estimates"),
        (name = "sentiment", description = "News sentiment"),
    )
)]
struct V1Doc;

/// The OpenAPI document for the configured prefix, titled after the service.
pub fn openapi(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = MetaDoc::openapi().nest(settings.api_prefix.clone(), V1Doc::openapi());
    doc.info.title = settings.app_name.clone();
    doc.info.version = settings.version.clone();
    doc
}
