use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        drone_category::{DroneCategoryDto, DroneCategoryInputDto},
    },
    server::{
        error::AppError,
        service::drone_category::DroneCategoryService,
        state::AppState,
        util::{
            extract::JsonObject,
            hyperlink::ResourceUrls,
            parse::{parse_id, NOT_FOUND},
        },
    },
};

/// Tag for grouping drone category endpoints in OpenAPI documentation
pub static DRONE_CATEGORY_TAG: &str = "drone-categories";

/// List all drone categories.
///
/// Categories are ordered by name. Each lists the URLs of its drones.
///
/// # Returns
/// - `200 OK` - Every category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drone-categories/",
    tag = DRONE_CATEGORY_TAG,
    responses(
        (status = 200, description = "All drone categories", body = Vec<DroneCategoryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drone_categories(
    State(state): State<AppState>,
    urls: ResourceUrls,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneCategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok(Json(
        categories
            .into_iter()
            .map(|c| c.into_dto(&urls))
            .collect::<Vec<_>>(),
    ))
}

/// Create a new drone category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `urls` - Absolute URL builder for the response
/// - `payload` - JSON object with the category name
///
/// # Returns
/// - `201 Created` - The created category
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drone-categories/",
    tag = DRONE_CATEGORY_TAG,
    request_body = DroneCategoryInputDto,
    responses(
        (status = 201, description = "Successfully created drone category", body = DroneCategoryDto),
        (status = 400, description = "Invalid category data", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone_category(
    State(state): State<AppState>,
    urls: ResourceUrls,
    JsonObject(payload): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let service = DroneCategoryService::new(&state.db);

    let category = service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(category.into_dto(&urls))))
}

/// Get a drone category by ID.
///
/// # Returns
/// - `200 OK` - The category with its drone URLs
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drone-categories/{id}/",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved drone category", body = DroneCategoryDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_category(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneCategoryService::new(&state.db);

    let category = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(category.into_dto(&urls)))
}

/// Replace a drone category.
///
/// # Returns
/// - `200 OK` - The updated category
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/drone-categories/{id}/",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    request_body = DroneCategoryInputDto,
    responses(
        (status = 200, description = "Successfully updated drone category", body = DroneCategoryDto),
        (status = 400, description = "Invalid category data", body = FieldErrorsDto),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_category(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
    payload: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneCategoryService::new(&state.db);

    // A missing record is reported before any problem with the body.
    if !service.exists(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    let JsonObject(payload) = payload?;

    let category = service
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(category.into_dto(&urls)))
}

/// Delete a drone category.
///
/// Drones in the category, and their competitions, are deleted with it.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No category with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/drone-categories/{id}/",
    tag = DRONE_CATEGORY_TAG,
    params(
        ("id" = i32, Path, description = "Drone category ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted drone category"),
        (status = 404, description = "Drone category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_drone_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = DroneCategoryService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
