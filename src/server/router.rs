//! Route table and OpenAPI document.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{competition, drone, drone_category, pilot, root},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Drones API",
    description = "Drone categories, drones, pilots and competitions"
))]
pub struct ApiDoc;

/// Builds every API route plus the OpenAPI JSON and Swagger UI endpoints.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::api_root))
        .routes(routes!(
            drone_category::list_drone_categories,
            drone_category::create_drone_category
        ))
        .routes(routes!(
            drone_category::get_drone_category,
            drone_category::update_drone_category,
            drone_category::delete_drone_category
        ))
        .routes(routes!(drone::list_drones, drone::create_drone))
        .routes(routes!(
            drone::get_drone,
            drone::update_drone,
            drone::delete_drone
        ))
        .routes(routes!(pilot::list_pilots, pilot::create_pilot))
        .routes(routes!(
            pilot::get_pilot,
            pilot::update_pilot,
            pilot::delete_pilot
        ))
        .routes(routes!(
            competition::list_competitions,
            competition::create_competition
        ))
        .routes(routes!(
            competition::get_competition,
            competition::update_competition,
            competition::delete_competition
        ))
        .split_for_parts();

    router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
}
