use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{booking, health},
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Loungeboard API",
        description = "Hourly lounge slot bookings per floor"
    ),
    paths(health::health),
    tags(
        (name = "booking", description = "Slot availability, bookings, and cancellation"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Booking API routes under `/api/bookings` along with their OpenAPI document.
fn api_routes() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(booking::get_availability))
        .routes(routes!(booking::create_bookings))
        .routes(routes!(booking::get_user_bookings))
        .routes(routes!(booking::get_upcoming))
        .routes(routes!(booking::is_admin))
        .routes(routes!(booking::cancel_booking))
        .split_for_parts()
}

/// Swagger UI serving the given OpenAPI document at `/api/docs`.
fn docs(api: utoipa::openapi::OpenApi) -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Routes outside the rate-limited API.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health))
}

/// Complete application routes, with `limit` wrapping the booking API only.
///
/// Docs and health stay outside `limit`. Other layers are left to the caller.
pub fn router<F>(limit: F) -> Result<Router<AppState>, AppError>
where
    F: FnOnce(Router<AppState>) -> Result<Router<AppState>, AppError>,
{
    let (api, doc) = api_routes();

    Ok(Router::new()
        .merge(limit(api)?)
        .merge(docs(doc))
        .merge(health_routes()))
}
