use actix_web::{get, web, HttpResponse};
use log::debug;
use serde::Deserialize;
use utoipa::IntoParams;
use vibemoney_schema::{AsOf, ProfitResponse, Symbol};
use vibemoney_service::profit as service;

use crate::{ApiError, AppState, ErrorBody};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProfitParams {
    /// Reference date (YYYY-MM-DD) or datetime (ISO8601); the close of that day is used
    #[param(example = "2024-01-15")]
    pub as_of: String,
}

#[utoipa::path(
    get,
    path = "/profit/{symbol}",
    tag = "profit",
    responses(
        (status = 200, description = "Price change since the reference date", body = ProfitResponse),
        (status = 422, description = "Invalid symbol or reference date", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(
        ("symbol" = String, Path, description = "Stock ticker symbol"),
        ProfitParams
    )
)]
#[get("/profit/{symbol}")]
pub async fn profit(
    path: web::Path<String>,
    params: web::Query<ProfitParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let symbol = Symbol::parse(&path.into_inner())?;
    let as_of = AsOf::parse(&params.as_of)?;
    debug!("[{symbol}] profit requested since {}", as_of.at);

    let data = service::profit(state.providers.prices.as_ref(), &symbol, as_of).await?;
    Ok(HttpResponse::Ok().json(data))
}
