use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Deserialize;
use utoipa::IntoParams;
use vibemoney_schema::{LatestEventsResponse, LimitBounds, Symbol};
use vibemoney_service::latestevents as service;

use crate::{ApiError, AppState, ErrorBody};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatestEventsParams {
    /// Ticker symbol to search events for
    #[param(example = "AAPL")]
    pub symbol: String,
    /// Maximum number of events
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/latestevents",
    tag = "latestevents",
    responses(
        (
            status = 200, description = "News and corporate events, newest first",
            body = LatestEventsResponse, content_type = "application/json",
            example = json!({ "symbol": "AAPL", "events": [] })
        ),
        (status = 422, description = "Missing or invalid symbol, or invalid limit", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(LatestEventsParams)
)]
#[get("/latestevents")]
pub async fn latest_events(
    params: web::Query<LatestEventsParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let symbol = Symbol::parse(&params.symbol)?;
    let limit = LimitBounds::LATEST_EVENTS.resolve(params.limit)?;
    debug!("[{symbol}] latest events requested: limit={}", limit.get());

    let data = service::latest_events(state.providers.latest_events.as_ref(), &symbol, limit).await?;
    Ok(HttpResponse::Ok().json(data))
}
