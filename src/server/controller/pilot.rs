use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        pilot::{PilotDto, PilotInputDto},
    },
    server::{
        error::AppError,
        service::pilot::PilotService,
        state::AppState,
        util::{
            extract::JsonObject,
            hyperlink::ResourceUrls,
            parse::{parse_id, NOT_FOUND},
        },
    },
};

/// Tag for grouping pilot endpoints in OpenAPI documentation
pub static PILOT_TAG: &str = "pilots";

/// List all pilots.
///
/// Pilots are ordered by name, each with their competitions nested.
///
/// # Returns
/// - `200 OK` - Every pilot
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pilots/",
    tag = PILOT_TAG,
    responses(
        (status = 200, description = "All pilots", body = Vec<PilotDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pilots(
    State(state): State<AppState>,
    urls: ResourceUrls,
) -> Result<impl IntoResponse, AppError> {
    let service = PilotService::new(&state.db);

    let pilots = service.get_all().await?;

    Ok(Json(
        pilots
            .into_iter()
            .map(|p| p.into_dto(&urls))
            .collect::<Vec<_>>(),
    ))
}

/// Create a new pilot.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `urls` - Absolute URL builder for the response
/// - `payload` - JSON object with name, optional gender and races count
///
/// # Returns
/// - `201 Created` - The created pilot
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/pilots/",
    tag = PILOT_TAG,
    request_body = PilotInputDto,
    responses(
        (status = 201, description = "Successfully created pilot", body = PilotDto),
        (status = 400, description = "Invalid pilot data", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pilot(
    State(state): State<AppState>,
    urls: ResourceUrls,
    JsonObject(payload): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let service = PilotService::new(&state.db);

    let pilot = service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(pilot.into_dto(&urls))))
}

/// Get a pilot by ID.
///
/// # Returns
/// - `200 OK` - The pilot with their competitions
/// - `404 Not Found` - No pilot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/pilots/{id}/",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved pilot", body = PilotDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pilot(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = PilotService::new(&state.db);

    let pilot = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(pilot.into_dto(&urls)))
}

/// Replace a pilot.
///
/// # Returns
/// - `200 OK` - The updated pilot
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No pilot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/pilots/{id}/",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    request_body = PilotInputDto,
    responses(
        (status = 200, description = "Successfully updated pilot", body = PilotDto),
        (status = 400, description = "Invalid pilot data", body = FieldErrorsDto),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_pilot(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
    payload: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = PilotService::new(&state.db);

    // A missing record is reported before any problem with the body.
    if !service.exists(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    let JsonObject(payload) = payload?;

    let pilot = service
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(pilot.into_dto(&urls)))
}

/// Delete a pilot.
///
/// The pilot's competitions are deleted with them.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No pilot with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/pilots/{id}/",
    tag = PILOT_TAG,
    params(
        ("id" = i32, Path, description = "Pilot ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted pilot"),
        (status = 404, description = "Pilot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pilot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = PilotService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
