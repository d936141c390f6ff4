use actix_web::{get, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::AppState;

/// Service metadata
///
/// ```json
/// {
///     "name": "VibeMoney Stock API",
///     "version": "0.1.0",
///     "api_prefix": "/api/v1",
///     "status": "ok"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub api_prefix: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Health {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses(
        (
            status = 200, description = "Service name, version and API prefix",
            body = ServiceInfo, content_type = "application/json",
            example = json!({
                "name": "VibeMoney Stock API",
                "version": "0.1.0",
                "api_prefix": "/api/v1",
                "status": "ok"
            })
        )
    )
)]
#[get("/")]
pub async fn root(state: web::Data<AppState>) -> impl Responder {
    let settings = &state.settings;
    HttpResponse::Ok().json(ServiceInfo {
        name: settings.app_name.clone(),
        version: settings.version.clone(),
        api_prefix: settings.api_prefix.clone(),
        status: "ok".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses(
        (
            status = 200, description = "Health check",
            body = Health, content_type = "application/json",
            example = json!({ "status": "healthy" })
        )
    )
)]
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(Health {
        status: "healthy".to_string(),
    })
}
