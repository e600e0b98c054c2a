use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, FieldErrorsDto},
        competition::{CompetitionDto, CompetitionInputDto},
    },
    server::{
        error::AppError,
        service::competition::CompetitionService,
        state::AppState,
        util::{
            extract::JsonObject,
            hyperlink::ResourceUrls,
            parse::{parse_id, NOT_FOUND},
        },
    },
};

/// Tag for grouping competition endpoints in OpenAPI documentation
pub static COMPETITION_TAG: &str = "competitions";

/// List all competitions.
///
/// Competitions are ordered by distance, longest first.
///
/// # Returns
/// - `200 OK` - Every competition
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/competitions/",
    tag = COMPETITION_TAG,
    responses(
        (status = 200, description = "All competitions", body = Vec<CompetitionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_competitions(
    State(state): State<AppState>,
    urls: ResourceUrls,
) -> Result<impl IntoResponse, AppError> {
    let service = CompetitionService::new(&state.db);

    let competitions = service.get_all().await?;

    Ok(Json(
        competitions
            .into_iter()
            .map(|c| c.into_dto(&urls))
            .collect::<Vec<_>>(),
    ))
}

/// Create a new competition.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `urls` - Absolute URL builder for the response
/// - `payload` - JSON object with pilot and drone URLs, distance and date
///
/// # Returns
/// - `201 Created` - The created competition
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/competitions/",
    tag = COMPETITION_TAG,
    request_body = CompetitionInputDto,
    responses(
        (status = 201, description = "Successfully created competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = FieldErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_competition(
    State(state): State<AppState>,
    urls: ResourceUrls,
    JsonObject(payload): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let service = CompetitionService::new(&state.db);

    let competition = service.create(&payload).await?;

    Ok((StatusCode::CREATED, Json(competition.into_dto(&urls))))
}

/// Get a competition by ID.
///
/// # Returns
/// - `200 OK` - The competition
/// - `404 Not Found` - No competition with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/competitions/{id}/",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved competition", body = CompetitionDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_competition(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = CompetitionService::new(&state.db);

    let competition = service
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(competition.into_dto(&urls)))
}

/// Replace a competition.
///
/// # Returns
/// - `200 OK` - The updated competition
/// - `400 Bad Request` - Malformed body or invalid fields
/// - `404 Not Found` - No competition with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/competitions/{id}/",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    request_body = CompetitionInputDto,
    responses(
        (status = 200, description = "Successfully updated competition", body = CompetitionDto),
        (status = 400, description = "Invalid competition data", body = FieldErrorsDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_competition(
    State(state): State<AppState>,
    urls: ResourceUrls,
    Path(id): Path<String>,
    payload: Result<JsonObject, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = CompetitionService::new(&state.db);

    // A missing record is reported before any problem with the body.
    if !service.exists(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    let JsonObject(payload) = payload?;

    let competition = service
        .update(id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(competition.into_dto(&urls)))
}

/// Delete a competition.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - No competition with this ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/competitions/{id}/",
    tag = COMPETITION_TAG,
    params(
        ("id" = i32, Path, description = "Competition ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted competition"),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id)?;
    let service = CompetitionService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
