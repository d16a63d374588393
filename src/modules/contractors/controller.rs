use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use plantdesk_core::{AppError, Paginated, PaginationParams, errors::ErrorResponse};
use plantdesk_models::{
    Contractor, ContractorFilter, ContractorFilterParams, CreateContractorDto, UpdateContractorDto,
};

use crate::middleware::auth::AuthUser;
use crate::middleware::list_query::ListQueryParams;
use crate::middleware::path::ValidatedPath;
use crate::modules::contractors::service::ContractorService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/contractors",
    params(PaginationParams, ContractorFilterParams),
    responses(
        (status = 200, description = "Page of contractors", body = Paginated<Contractor>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse)
    ),
    tag = "Contractors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_contractors(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ListQueryParams(query): ListQueryParams<ContractorFilter>,
) -> Result<Json<Paginated<Contractor>>, AppError> {
    let contractors = ContractorService::list_contractors(&state.store, &principal, query).await?;

    Ok(Json(contractors))
}

#[utoipa::path(
    post,
    path = "/api/contractors",
    request_body = CreateContractorDto,
    responses(
        (status = 201, description = "Contractor created", body = Contractor),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Contractors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_contractor(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateContractorDto>,
) -> Result<(StatusCode, Json<Contractor>), AppError> {
    let contractor = ContractorService::create_contractor(&state.store, &principal, dto).await?;

    Ok((StatusCode::CREATED, Json(contractor)))
}

#[utoipa::path(
    get,
    path = "/api/contractors/{id}",
    params(
        ("id" = Uuid, Path, description = "Contractor ID")
    ),
    responses(
        (status = 200, description = "Contractor details", body = Contractor),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Contractor not found", body = ErrorResponse)
    ),
    tag = "Contractors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_contractor(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Contractor>, AppError> {
    let contractor = ContractorService::get_contractor(&state.store, &principal, id).await?;

    Ok(Json(contractor))
}

#[utoipa::path(
    put,
    path = "/api/contractors/{id}",
    params(
        ("id" = Uuid, Path, description = "Contractor ID")
    ),
    request_body = UpdateContractorDto,
    responses(
        (status = 200, description = "Contractor updated", body = Contractor),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Contractor not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Contractors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_contractor(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateContractorDto>,
) -> Result<Json<Contractor>, AppError> {
    let contractor =
        ContractorService::update_contractor(&state.store, &principal, id, dto).await?;

    Ok(Json(contractor))
}

#[utoipa::path(
    delete,
    path = "/api/contractors/{id}",
    params(
        ("id" = Uuid, Path, description = "Contractor ID")
    ),
    responses(
        (status = 204, description = "Contractor deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Staff only", body = ErrorResponse),
        (status = 404, description = "Contractor not found", body = ErrorResponse),
        (status = 409, description = "Contractor is assigned to projects", body = ErrorResponse)
    ),
    tag = "Contractors",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_contractor(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ContractorService::delete_contractor(&state.store, &principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
