use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        drone::{DroneDto, DroneInputDto},
    },
    server::{
        error::AppError,
        service::drone::DroneService,
        state::AppState,
        util::{
            extract::JsonObject,
            hyperlink::ResourceUrls,
            parse::{parse_id, NOT_FOUND},
        },
    },
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drones";

/// List all drones.
///
/// Drones are ordered by name.
///
/// # Returns
/// - `200 OK` - Every drone
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "All drones", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drones(
    State(state): State<AppState>,
    urls: ResourceUrls,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drones = service.get_all().await?;

    Ok(Json(
        drones
            .into_iter()
            .map(|d| d.into_dto(&urls))
            .collect::<Vec<_>>(),
    ))
}

/// Create a new drone.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `urls` - Absolute URL builder for the response
/// - `payload` - JSON object with the drone fields and its category URL
///
/// # Returns
/// - `201 Created` - The created drone
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drones/",
    tag = DRONE_TAG,
    request_body = DroneInputDto,
    responses(
        (status = 201, description = "Successfully created drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    urls: ResourceUrls,
    JsonObject(payload): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneService::new(&state.db);

    let drone = service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(drone.into_dto(&urls))))
}

/// Get a drone by ID.
///
/// # Returns
/// - `200 OK` - The drone
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/{id}/",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drone", body = DroneDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneService::new(&state.db);

    let drone = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(drone.into_dto(&urls)))
}

/// Replace a drone.
///
/// # Returns
/// - `200 OK` - The updated drone
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/drones/{id}/",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    request_body = DroneInputDto,
    responses(
        (status = 200, description = "Successfully updated drone", body = DroneDto),
        (status = 400, description = "Invalid drone data", body = FieldErrorsDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
    payload: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneService::new(&state.db);

    // A missing record is reported before any problem with the body.
    if !service.exists(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    let JsonObject(payload) = payload?;

    let drone = service
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(drone.into_dto(&urls)))
}

/// Delete a drone.
///
/// Competitions flown with the drone are deleted with it.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No drone with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/drones/{id}/",
    tag = DRONE_TAG,
    params(
        ("id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted drone"),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
