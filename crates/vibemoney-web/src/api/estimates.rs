use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Deserialize;
use utoipa::IntoParams;
use vibemoney_schema::{EstimatePeriod, EstimatesResponse, LimitBounds, Symbol};
use vibemoney_service::estimates as service;

use crate::{ApiError, AppState, ErrorBody};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EstimatesParams {
    /// Which estimate periods to return: annual, quarterly or both
    #[param(example = "both")]
    pub period: Option<String>,
    /// How many most-recent entries to return for each period
    #[param(minimum = 1, maximum = 20, example = 4)]
    pub limit: Option<i64>,
}

/// Earnings estimates (EPS & revenue) with a revision trend signal
///
/// A revision history trending up is **good**, down is **bad**, unchanged is **flat**.
#[utoipa::path(
    get,
    path = "/estimates/{symbol}",
    tag = "estimates",
    responses(
        (
            status = 200, description = "EPS and revenue estimates with revision signals",
            body = EstimatesResponse, content_type = "application/json",
            example = json!({ "symbol": "AAPL", "period": "both", "points": [] })
        ),
        (status = 422, description = "Invalid symbol, period or limit", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(
        ("symbol" = String, Path, description = "Stock ticker symbol"),
        EstimatesParams
    )
)]
#[get("/estimates/{symbol}")]
pub async fn estimates(
    path: web::Path<String>,
    params: web::Query<EstimatesParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let symbol = Symbol::parse(&path.into_inner())?;
    let params = params.into_inner();
    let period = match params.period {
        Some(raw) => raw.parse::<EstimatePeriod>()?,
        None => EstimatePeriod::default(),
    };
    let limit = LimitBounds::ESTIMATES.resolve(params.limit)?;
    debug!("[{symbol}] estimates requested: period={period:?}, limit={}", limit.get());

    let data = service::estimates(state.providers.estimates.as_ref(), &symbol, period, limit).await?;
    Ok(HttpResponse::Ok().json(data))
}
