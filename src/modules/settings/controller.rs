use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;

use plantdesk_core::{AppError, Paginated, PaginationParams, errors::ErrorResponse};
use plantdesk_models::{
    CreateSettingDto, Setting, SettingFilter, SettingFilterParams, UpdateSettingDto,
};

use crate::middleware::auth::AuthUser;
use crate::middleware::list_query::ListQueryParams;
use crate::middleware::path::ValidatedPath;
use crate::modules::settings::service::SettingService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/settings",
    params(PaginationParams, SettingFilterParams),
    responses(
        (status = 200, description = "Page of settings", body = Paginated<Setting>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot read settings", body = ErrorResponse)
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_settings(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ListQueryParams(query): ListQueryParams<SettingFilter>,
) -> Result<Json<Paginated<Setting>>, AppError> {
    let settings = SettingService::list_settings(&state.store, &principal, query).await?;

    Ok(Json(settings))
}

#[utoipa::path(
    post,
    path = "/api/settings",
    request_body = CreateSettingDto,
    responses(
        (status = 201, description = "Setting created", body = Setting),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Only admins can change settings", body = ErrorResponse),
        (status = 409, description = "Key already exists", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_setting(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateSettingDto>,
) -> Result<(StatusCode, Json<Setting>), AppError> {
    let setting = SettingService::create_setting(&state.store, &principal, dto).await?;

    Ok((StatusCode::CREATED, Json(setting)))
}

#[utoipa::path(
    get,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 200, description = "Setting details", body = Setting),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot read settings", body = ErrorResponse),
        (status = 404, description = "Setting not found", body = ErrorResponse)
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_setting(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(key): ValidatedPath<String>,
) -> Result<Json<Setting>, AppError> {
    let setting = SettingService::get_setting(&state.store, &principal, &key).await?;

    Ok(Json(setting))
}

#[utoipa::path(
    put,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    request_body = UpdateSettingDto,
    responses(
        (status = 200, description = "Setting updated", body = Setting),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Only admins can change settings", body = ErrorResponse),
        (status = 404, description = "Setting not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_setting(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(key): ValidatedPath<String>,
    ValidatedJson(dto): ValidatedJson<UpdateSettingDto>,
) -> Result<Json<Setting>, AppError> {
    let setting = SettingService::update_setting(&state.store, &principal, &key, dto).await?;

    Ok(Json(setting))
}

#[utoipa::path(
    delete,
    path = "/api/settings/{key}",
    params(
        ("key" = String, Path, description = "Setting key")
    ),
    responses(
        (status = 204, description = "Setting deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Only admins can change settings", body = ErrorResponse),
        (status = 404, description = "Setting not found", body = ErrorResponse)
    ),
    tag = "Settings",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_setting(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(key): ValidatedPath<String>,
) -> Result<StatusCode, AppError> {
    SettingService::delete_setting(&state.store, &principal, &key).await?;

    Ok(StatusCode::NO_CONTENT)
}
