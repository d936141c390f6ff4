pub mod api;
pub mod config;
pub mod docs;
pub mod error;
pub mod state;

pub use config::{ConfigError, Settings};
pub use error::{ApiError, ErrorBody};
pub use state::AppState;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App,
};
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Build the application: meta routes at the root, documentation, then the versioned API
/// under `settings.api_prefix`.
///
/// Documentation is registered before the versioned scope; a scope claims every path under its
/// prefix, so anything mounted after it under the same prefix would be unreachable.
pub fn create_app(
    state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let settings = state.settings.clone();
    let openapi = docs::openapi(&settings);

    App::new()
        .wrap(Logger::default())
        .app_data(state)
        .app_data(api::query_config())
        .app_data(api::path_config())
        // meta endpoints
        .service(api::meta::root)
        .service(api::meta::health)
        // api documentation
        .service(web::redirect(settings.docs_url(), format!("{}/", settings.docs_url())))
        .service(
            SwaggerUi::new(format!("{}/{{_:.*}}", settings.docs_url()))
                .url(settings.openapi_url(), openapi.clone()),
        )
        .service(Redoc::with_url(settings.redoc_url(), openapi.clone()))
        .service(RapiDoc::new(settings.openapi_url()).path(settings.rapidoc_url()))
        .service(Scalar::with_url(settings.scalar_url(), openapi))
        // api endpoints
        .service(
            web::scope(&settings.api_prefix)
                .service(api::timeseries::timeseries)
                .service(api::quarterly::quarterly)
                .service(api::latestevents::latest_events)
                .service(api::profit::profit)
                .service(api::estimates::estimates)
                .service(api::sentiment::sentiment),
        )
        .default_service(web::to(api::not_found))
}
