// API layer - HTTP endpoints
pub mod auth;
pub mod health;
pub mod items;
pub mod route_guard;

use std::sync::Arc;

use poem::endpoint::{BoxEndpoint, StaticFilesEndpoint};
use poem::error::{MethodNotAllowedError, NotFoundError, StaticFileError};
use poem::http::StatusCode;
use poem::middleware::{CookieJarManager, Cors, Tracing};
use poem::{EndpointExt, IntoResponse, Route};
use poem_openapi::OpenApiService;
use poem_openapi::error::{ContentTypeError, ParseParamError, ParseRequestPayloadError};
use poem_openapi::payload::Json;

pub use auth::AuthApi;
pub use health::HealthApi;
pub use items::ItemsApi;
pub use route_guard::RouteGuard;

use crate::app_data::AppData;
use crate::types::dto::common::ErrorResponse;

/// Compose the full HTTP application
///
/// * `/api/**` - OpenAPI service (health, items, auth)
/// * `/swagger` - Swagger UI
/// * everything else - static pages from the frontend directory, behind the route guard
///
/// Unmatched routes and methods answer 404, and request bodies or parameters that
/// cannot be parsed answer 400, both with the standard error envelope.
pub fn build_app(app_data: Arc<AppData>) -> BoxEndpoint<'static> {
    let settings = Arc::clone(&app_data.settings);

    let api_service = OpenApiService::new(
        (
            HealthApi,
            ItemsApi::new(Arc::clone(&app_data)),
            AuthApi::new(Arc::clone(&app_data)),
        ),
        "ItemStore API",
        env!("CARGO_PKG_VERSION"),
    )
    .server("/api");

    let ui = api_service.swagger_ui();

    let pages = StaticFilesEndpoint::new(settings.frontend_dir()).index_file("index.html");

    let cors = settings
        .cors_origins()
        .iter()
        .fold(Cors::new().allow_credentials(true), |cors, origin| {
            cors.allow_origin(origin.as_str())
        });

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .nest("/", pages)
        .with(RouteGuard::new(Arc::clone(&app_data.session_provider)))
        .with(CookieJarManager::new())
        .catch_all_error(|err: poem::Error| async move {
            if err.is::<NotFoundError>()
                || err.is::<MethodNotAllowedError>()
                || (err.is::<StaticFileError>() && err.status() == StatusCode::NOT_FOUND)
            {
                return endpoint_not_found();
            }
            if err.is::<ParseRequestPayloadError>()
                || err.is::<ContentTypeError>()
                || err.is::<ParseParamError>()
            {
                return invalid_request(&err);
            }
            err.into_response()
        })
        .with(cors)
        .with(Tracing)
        .map_to_response()
        .boxed()
}

fn endpoint_not_found() -> poem::Response {
    Json(ErrorResponse::new("Endpoint not found"))
        .with_status(StatusCode::NOT_FOUND)
        .into_response()
}

fn invalid_request(err: &poem::Error) -> poem::Response {
    tracing::debug!("Rejected request: {}", err);
    Json(ErrorResponse::new(format!("Invalid request body: {}", err)))
        .with_status(StatusCode::BAD_REQUEST)
        .into_response()
}
