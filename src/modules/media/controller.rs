use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use plantdesk_core::{AppError, Paginated, PaginationParams, errors::ErrorResponse};
use plantdesk_models::{CreateMediaDto, Media, MediaFilter, MediaFilterParams};

use crate::middleware::auth::AuthUser;
use crate::middleware::list_query::ListQueryParams;
use crate::middleware::path::ValidatedPath;
use crate::modules::media::service::MediaService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/media",
    params(PaginationParams, MediaFilterParams),
    responses(
        (status = 200, description = "Page of media records; clients only see their own", body = Paginated<Media>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Media",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_media_list(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ListQueryParams(query): ListQueryParams<MediaFilter>,
) -> Result<Json<Paginated<Media>>, AppError> {
    let media = MediaService::list_media(&state.store, &principal, query).await?;

    Ok(Json(media))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}/media",
    params(
        ("id" = Uuid, Path, description = "Project ID"),
        PaginationParams,
        MediaFilterParams
    ),
    responses(
        (status = 200, description = "Page of the project's media", body = Paginated<Media>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Project belongs to another client", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Media",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_project_media(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ListQueryParams(query): ListQueryParams<MediaFilter>,
) -> Result<Json<Paginated<Media>>, AppError> {
    let media =
        MediaService::list_project_media(&state.store, &principal, id, query).await?;

    Ok(Json(media))
}

#[utoipa::path(
    post,
    path = "/api/media",
    request_body = CreateMediaDto,
    responses(
        (status = 201, description = "Media record created", body = Media),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot add media", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Media",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_media(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateMediaDto>,
) -> Result<(StatusCode, Json<Media>), AppError> {
    let media = MediaService::create_media(&state.store, &principal, dto).await?;

    Ok((StatusCode::CREATED, Json(media)))
}

#[utoipa::path(
    get,
    path = "/api/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 200, description = "Media details", body = Media),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Media belongs to another client", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse)
    ),
    tag = "Media",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_media(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Media>, AppError> {
    let media = MediaService::get_media(&state.store, &principal, id).await?;

    Ok(Json(media))
}

#[utoipa::path(
    delete,
    path = "/api/media/{id}",
    params(
        ("id" = Uuid, Path, description = "Media ID")
    ),
    responses(
        (status = 204, description = "Media record deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot delete media", body = ErrorResponse),
        (status = 404, description = "Media not found", body = ErrorResponse)
    ),
    tag = "Media",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_media(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    MediaService::delete_media(&state.store, &principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
