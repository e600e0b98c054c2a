use axum::Json;

use crate::{
    model::api::ApiRootDto,
    server::{model::resource::Resource, util::hyperlink::ResourceUrls},
};

/// Tag for the API root in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// List the collection URLs of every resource.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Collection URLs by resource name", body = ApiRootDto)
    ),
)]
pub async fn api_root(urls: ResourceUrls) -> Json<ApiRootDto> {
    Json(ApiRootDto {
        drone_categories: urls.collection(Resource::DroneCategories),
        drones: urls.collection(Resource::Drones),
        pilots: urls.collection(Resource::Pilots),
        competitions: urls.collection(Resource::Competitions),
    })
}
