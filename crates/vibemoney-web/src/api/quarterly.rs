use actix_web::{get, web, HttpResponse};
use log::debug;
use vibemoney_schema::{QuarterlyResponse, Symbol};
use vibemoney_service::quarterly as service;

use crate::{ApiError, AppState, ErrorBody};

/// Quarterly fundamentals of a stock symbol
///
/// ```json
/// {
///     "symbol": "AAPL",
///     "quarters": [
///         {
///             "symbol": "AAPL",
///             "fiscal_period": "2025Q1",
///             "period_end_date": "2024-12-28",
///             "release_date": "2025-01-30",
///             "filing_date": "2025-01-31",
///             "metrics": { "NetIncomeLoss": 36330000000.0, "Revenues": 124300000000.0 }
///         },
///         // ...
///     ]
/// }
/// ```
#[utoipa::path(
    get,
    path = "/quarterly/{symbol}",
    tag = "quarterly",
    responses(
        (
            status = 200, description = "Revenue, net income and other metrics per fiscal quarter, with their announcement dates",
            body = QuarterlyResponse, content_type = "application/json",
            example = json!({ "symbol": "AAPL", "quarters": [] })
        ),
        (status = 422, description = "Invalid symbol", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(
        ("symbol" = String, Path, description = "Stock ticker symbol")
    )
)]
#[get("/quarterly/{symbol}")]
pub async fn quarterly(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let symbol = Symbol::parse(&path.into_inner())?;
    debug!("[{symbol}] quarterly fundamentals requested");

    let data = service::quarterly(state.providers.quarterly.as_ref(), &symbol).await?;
    Ok(HttpResponse::Ok().json(data))
}
