use std::sync::Arc;

use actix_web::{
    http::{header, StatusCode},
    test,
    web::Data,
};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::{json, Value};
use vibemoney_schema::{EventType, Interval, LatestEvent, Limit, Symbol, TimeSeriesPoint};
use vibemoney_service::{
    LatestEventsProvider, ProviderError, Providers, TimeSeriesProvider, TimeSeriesQuery,
};
use vibemoney_web::{create_app, AppState, Settings};

fn state(providers: Providers) -> Data<AppState> {
    Data::new(AppState::new(Settings::default(), providers))
}

async fn get(providers: Providers, uri: &str) -> (StatusCode, Value) {
    let app = test::init_service(create_app(state(providers))).await;
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap()
}

struct FixedSeries;

#[async_trait]
impl TimeSeriesProvider for FixedSeries {
    async fn time_series(
        &self,
        query: &TimeSeriesQuery,
    ) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        Ok([3, 1, 2]
            .into_iter()
            .map(|day| TimeSeriesPoint {
                symbol: query.symbol.clone(),
                interval: query.interval,
                timestamp: at(day),
                open: 1.0,
                high: 2.0,
                low: 0.5,
                close: day as f64,
                volume: 100,
            })
            .collect())
    }
}

struct Down;

#[async_trait]
impl TimeSeriesProvider for Down {
    async fn time_series(&self, _: &TimeSeriesQuery) -> Result<Vec<TimeSeriesPoint>, ProviderError> {
        Err(ProviderError::Unavailable {
            provider: "polygon",
            reason: "connection refused".into(),
        })
    }
}

struct Headlines;

#[async_trait]
impl LatestEventsProvider for Headlines {
    async fn latest_events(
        &self,
        symbol: &Symbol,
        _: Limit,
    ) -> Result<Vec<LatestEvent>, ProviderError> {
        Ok([1, 3, 2]
            .into_iter()
            .map(|day| LatestEvent {
                symbol: symbol.clone(),
                published_at: at(day),
                event_type: EventType::News,
                title: format!("headline {day}"),
                summary: None,
                source: None,
                url: None,
            })
            .collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////

#[actix_web::test]
async fn health_reports_healthy() {
    let (status, body) = get(Providers::stub(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy" }));
}

#[actix_web::test]
async fn root_describes_the_service() {
    let settings = Settings {
        app_name: "Test API".into(),
        version: "9.9.9".into(),
        api_prefix: "/api/v2".into(),
        ..Settings::default()
    };
    let app = test::init_service(create_app(Data::new(AppState::new(
        settings,
        Providers::stub(),
    ))))
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body,
        json!({ "name": "Test API", "version": "9.9.9", "api_prefix": "/api/v2", "status": "ok" })
    );

    let req = test::TestRequest::get().uri("/api/v2/quarterly/AAPL").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn timeseries_echoes_symbol_and_interval() {
    let (status, body) = get(Providers::stub(), "/api/v1/timeseries/aapl?interval=1d&limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "symbol": "AAPL", "interval": "1d", "points": [] }));
}

#[actix_web::test]
async fn timeseries_defaults_to_daily() {
    let (status, body) = get(Providers::stub(), "/api/v1/timeseries/MSFT").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["interval"], Interval::OneDay.as_str());
}

#[actix_web::test]
async fn timeseries_keeps_the_most_recent_points_in_order() {
    let providers = Providers::stub().with_timeseries(Arc::new(FixedSeries));
    let (status, body) = get(providers, "/api/v1/timeseries/AAPL?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let closes: Vec<f64> = body["points"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["close"].as_f64().unwrap())
        .collect();
    assert_eq!(closes, vec![2.0, 3.0]);
    assert_eq!(body["points"][0]["timestamp"], "2025-01-02T00:00:00Z");
}

#[actix_web::test]
async fn invalid_limits_are_rejected() {
    for uri in [
        "/api/v1/timeseries/AAPL?limit=0",
        "/api/v1/timeseries/AAPL?limit=-1",
        "/api/v1/timeseries/AAPL?limit=5001",
        "/api/v1/timeseries/AAPL?limit=abc",
        "/api/v1/latestevents?symbol=AAPL&limit=0",
        "/api/v1/latestevents?symbol=AAPL&limit=101",
        "/api/v1/latestevents?symbol=AAPL&limit=abc",
        "/api/v1/estimates/AAPL?limit=21",
        "/api/v1/sentiment?tickers=AAPL&limit=1001",
    ] {
        let (status, body) = get(Providers::stub(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert_eq!(body["status"], 422, "{uri}");
        assert_eq!(body["error"], "validation_error", "{uri}");
    }
}

#[actix_web::test]
async fn invalid_symbol_and_interval_are_rejected() {
    for uri in [
        "/api/v1/timeseries/AAPL?interval=2d",
        "/api/v1/timeseries/AAPL?interval=1D",
        "/api/v1/timeseries/1ABC",
        "/api/v1/quarterly/A$PL",
        "/api/v1/profit/AAPL?as_of=yesterday",
        "/api/v1/estimates/AAPL?period=monthly",
    ] {
        let (status, body) = get(Providers::stub(), uri).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
        assert!(!body["message"].as_str().unwrap().is_empty(), "{uri}");
    }
}

#[actix_web::test]
async fn provider_failures_are_bad_gateway() {
    let providers = Providers::stub().with_timeseries(Arc::new(Down));
    let (status, body) = get(providers, "/api/v1/timeseries/AAPL").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "upstream_error");
}

#[actix_web::test]
async fn quarterly_returns_symbol_and_quarters() {
    let (status, body) = get(Providers::stub(), "/api/v1/quarterly/AAPL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "symbol": "AAPL", "quarters": [] }));
}

#[actix_web::test]
async fn latest_events_are_newest_first_and_truncated() {
    let (status, body) = get(Providers::stub(), "/api/v1/latestevents?symbol=AAPL&limit=10").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "symbol": "AAPL", "events": [] }));

    let providers = Providers::stub().with_latest_events(Arc::new(Headlines));
    let (_, body) = get(providers, "/api/v1/latestevents?symbol=AAPL&limit=2").await;
    let titles: Vec<&str> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["headline 3", "headline 2"]);
    assert_eq!(body["events"][0]["event_type"], "news");
}

#[actix_web::test]
async fn latest_events_require_a_symbol() {
    let (status, body) = get(Providers::stub(), "/api/v1/latestevents?limit=10").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn profit_normalizes_the_reference_date() {
    let (status, body) = get(Providers::stub(), "/api/v1/profit/aapl?as_of=2024-01-15").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "symbol": "AAPL",
            "as_of": "2024-01-15T00:00:00Z",
            "price_then": null,
            "price_now": null,
            "profit": null
        })
    );
}

#[actix_web::test]
async fn estimates_default_to_both_periods() {
    let (status, body) = get(Providers::stub(), "/api/v1/estimates/AAPL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "symbol": "AAPL", "period": "both", "points": [] }));
}

#[actix_web::test]
async fn sentiment_accepts_repeated_and_comma_separated_tickers() {
    let (status, body) = get(
        Providers::stub(),
        "/api/v1/sentiment?tickers=aapl&tickers=MSFT,aapl&good_threshold=0.1",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tickers"], json!(["AAPL", "MSFT"]));
    assert_eq!(body["used_threshold"], 0.1);
    assert_eq!(body["results"][0]["article_count"], 0);
    assert_eq!(body["results"][0]["good"], false);
}

#[actix_web::test]
async fn sentiment_requires_tickers() {
    let (status, _) = get(Providers::stub(), "/api/v1/sentiment").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn unknown_routes_are_json_not_found() {
    for uri in ["/nope", "/api/v1/nope"] {
        let (status, body) = get(Providers::stub(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "not_found", "{uri}");
    }
}

#[actix_web::test]
async fn openapi_documents_the_point_fields() {
    let (status, body) = get(Providers::stub(), "/api/v1/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let mut fields: Vec<&str> = body["components"]["schemas"]["TimeSeriesPoint"]["properties"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    fields.sort_unstable();
    assert_eq!(
        fields,
        vec!["close", "high", "interval", "low", "open", "symbol", "timestamp", "volume"]
    );
    assert!(body["paths"]["/api/v1/timeseries/{symbol}"].is_object());
    assert_eq!(body["info"]["title"], Settings::default().app_name);
}

#[actix_web::test]
async fn bare_docs_path_redirects_to_swagger_ui() {
    let app = test::init_service(create_app(state(Providers::stub()))).await;
    let req = test::TestRequest::get().uri("/api/v1/docs").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_redirection());
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/api/v1/docs/"
    );
}

#[actix_web::test]
async fn redoc_is_served_under_the_prefix() {
    let app = test::init_service(create_app(state(Providers::stub()))).await;
    let req = test::TestRequest::get().uri("/api/v1/redoc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
