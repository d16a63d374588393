use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use plantdesk_core::{AppError, Paginated, PaginationParams, errors::ErrorResponse};
use plantdesk_models::{
    CreateProjectDto, Project, ProjectFilter, ProjectFilterParams, UpdateProjectDto,
};

use crate::middleware::auth::AuthUser;
use crate::middleware::list_query::ListQueryParams;
use crate::middleware::path::ValidatedPath;
use crate::modules::projects::service::ProjectService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/projects",
    params(PaginationParams, ProjectFilterParams),
    responses(
        (status = 200, description = "Page of projects; clients only see their own", body = Paginated<Project>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Projects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_projects(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ListQueryParams(query): ListQueryParams<ProjectFilter>,
) -> Result<Json<Paginated<Project>>, AppError> {
    let projects = ProjectService::list_projects(&state.store, &principal, query).await?;

    Ok(Json(projects))
}

#[utoipa::path(
    post,
    path = "/api/projects",
    request_body = CreateProjectDto,
    responses(
        (status = 201, description = "Project created", body = Project),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot create projects", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Projects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateProjectDto>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = ProjectService::create_project(&state.store, &principal, dto).await?;

    Ok((StatusCode::CREATED, Json(project)))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project details", body = Project),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Project belongs to another client", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Projects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Project>, AppError> {
    let project = ProjectService::get_project(&state.store, &principal, id).await?;

    Ok(Json(project))
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    request_body = UpdateProjectDto,
    responses(
        (status = 200, description = "Project updated", body = Project),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot modify projects", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Projects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_project(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateProjectDto>,
) -> Result<Json<Project>, AppError> {
    let project = ProjectService::update_project(&state.store, &principal, id, dto).await?;

    Ok(Json(project))
}

#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    params(
        ("id" = Uuid, Path, description = "Project ID")
    ),
    responses(
        (status = 204, description = "Project and its documents and media deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot delete projects", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Projects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_project(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    ProjectService::delete_project(&state.store, &principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
