use actix_web::{get, web, HttpRequest, HttpResponse};
use log::debug;
use serde::Deserialize;
use url::form_urlencoded;
use utoipa::IntoParams;
use vibemoney_schema::{LimitBounds, SentimentResponse};
use vibemoney_service::sentiment::{self as service, SentimentOptions};

use crate::{ApiError, AppState, ErrorBody};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SentimentParams {
    /// Average sentiment threshold to mark a ticker as good
    #[param(example = 0.07)]
    pub good_threshold: Option<f64>,
    /// Maximum news items per ticker to aggregate
    #[param(minimum = 1, maximum = 1000, example = 50)]
    pub limit: Option<i64>,
    /// Ignore ticker mentions with a lower relevance score
    #[param(minimum = 0.0, maximum = 1.0)]
    pub min_relevance: Option<f64>,
}

/// Every `tickers` value in the query string, split on commas.
///
/// `tickers=AAPL&tickers=MSFT` and `tickers=AAPL,MSFT` are equivalent.
fn tickers_from_query(query: &str) -> Vec<String> {
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "tickers")
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/sentiment",
    tag = "sentiment",
    responses(
        (
            status = 200, description = "Average news sentiment per ticker",
            body = SentimentResponse, content_type = "application/json",
            example = json!({
                "tickers": ["AAPL"],
                "used_threshold": 0.07,
                "results": [
                    {
                        "ticker": "AAPL",
                        "article_count": 0,
                        "avg_sentiment": null,
                        "label": null,
                        "good": false
                    }
                ]
            })
        ),
        (status = 422, description = "Missing tickers or invalid options", body = ErrorBody),
        (status = 502, description = "Data provider failure", body = ErrorBody)
    ),
    params(
        ("tickers" = Vec<String>, Query, description = "e.g. tickers=AAPL&tickers=MSFT or tickers=AAPL,MSFT"),
        SentimentParams
    )
)]
#[get("/sentiment")]
pub async fn sentiment(
    req: HttpRequest,
    params: web::Query<SentimentParams>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let raw = tickers_from_query(req.query_string());
    let tickers = service::normalize_tickers(raw.iter().map(String::as_str))?;

    let params = params.into_inner();
    let limit = LimitBounds::SENTIMENT.resolve(params.limit)?;
    let options = SentimentOptions::new(params.good_threshold, limit, params.min_relevance)?;
    debug!("sentiment requested for {} tickers: {options:?}", tickers.len());

    let data = service::sentiment(state.providers.sentiment.as_ref(), &tickers, &options).await?;
    Ok(HttpResponse::Ok().json(data))
}
