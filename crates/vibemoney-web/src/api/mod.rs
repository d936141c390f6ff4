pub mod estimates;
pub mod latestevents;
pub mod meta;
pub mod profit;
pub mod quarterly;
pub mod sentiment;
pub mod timeseries;

use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use log::debug;

use crate::ApiError;

/// Query-string extraction failures become JSON validation errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, req| {
        debug!("rejected query string for {}: {err}", req.path());
        ApiError::InvalidRequest(err.to_string()).into()
    })
}

/// Path segment extraction failures become JSON validation errors.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        debug!("rejected path {}: {err}", req.path());
        ApiError::InvalidRequest(err.to_string()).into()
    })
}

pub async fn not_found(req: HttpRequest) -> HttpResponse {
    ApiError::NotFound(format!("no route for {} {}", req.method(), req.path())).error_response()
}
