use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Deserialize;
use utoipa::IntoParams;
use vibemoney_schema::{Interval, LimitBounds, Symbol, TimeSeriesResponse};
use vibemoney_service::{timeseries as service, TimeSeriesQuery};

use crate::{ApiError, AppState, ErrorBody};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TimeSeriesParams {
    /// Time interval between data points: 1m, 5m, 15m, 1h or 1d
    #[param(example = "1d")]
    pub interval: Option<String>,
    /// Maximum number of data points to return
    #[param(minimum = 1, maximum = 5000, example = 100)]
    pub limit: Option<i64>,
}

/// Time series of a stock symbol
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "interval": "1d",
///     "points": [
///         {
///             "symbol": "AAPL",
///             "interval": "1d",
///             "timestamp": "2025-01-02T00:00:00Z",
///             "open": 248.93,
///             "high": 249.10,
///             "low": 241.82,
///             "close": 243.85,
///             "volume": 55740731
///         },
///         // ...
///     ]
/// }
/// ```
#[utoipa::path(
    get,
    path = "/timeseries/{symbol}",
    tag = "timeseries",
    responses(
        (
            status = 200, description = "OHLCV observations, oldest first, at most `limit` of them",
            body = TimeSeriesResponse, content_type = "application/json",
            example = json!({ "symbol": "AAPL", "interval": "1d", "points": [] })
        ),
        (status = 422, description = "Invalid symbol, interval or limit", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(
        ("symbol" = String, Path, description = "Stock ticker symbol"),
        TimeSeriesParams
    )
)]
#[get("/timeseries/{symbol}")]
pub async fn timeseries(
    path: web::Path<String>,
    params: web::Query<TimeSeriesParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let symbol = Symbol::parse(&path.into_inner())?;
    let params = params.into_inner();
    let interval = match params.interval {
        Some(raw) => raw.parse::<Interval>()?,
        None => Interval::default(),
    };
    let limit = LimitBounds::TIMESERIES.resolve(params.limit)?;
    debug!("[{symbol}] time series requested: interval={interval}, limit={}", limit.get());

    let query = TimeSeriesQuery {
        symbol,
        interval,
        limit,
    };
    let data = service::time_series(state.providers.timeseries.as_ref(), &query).await?;

    Ok(HttpResponse::Ok().json(data))
}
