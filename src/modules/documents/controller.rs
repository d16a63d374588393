use axum::{
    Json,
    extract::State,
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use plantdesk_core::{AppError, Paginated, PaginationParams, errors::ErrorResponse};
use plantdesk_models::{CreateDocumentDto, Document, DocumentFilter, DocumentFilterParams};

use crate::middleware::auth::AuthUser;
use crate::middleware::list_query::ListQueryParams;
use crate::middleware::path::ValidatedPath;
use crate::modules::documents::service::DocumentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

#[utoipa::path(
    get,
    path = "/api/documents",
    params(PaginationParams, DocumentFilterParams),
    responses(
        (status = 200, description = "Page of documents; clients only see their own", body = Paginated<Document>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_documents(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ListQueryParams(query): ListQueryParams<DocumentFilter>,
) -> Result<Json<Paginated<Document>>, AppError> {
    let documents = DocumentService::list_documents(&state.store, &principal, query).await?;

    Ok(Json(documents))
}

#[utoipa::path(
    get,
    path = "/api/projects/{id}/documents",
    params(
        ("id" = Uuid, Path, description = "Project ID"),
        PaginationParams,
        DocumentFilterParams
    ),
    responses(
        (status = 200, description = "Page of the project's documents", body = Paginated<Document>),
        (status = 400, description = "Invalid paging, sort or filter value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Project belongs to another client", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_project_documents(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
    ListQueryParams(query): ListQueryParams<DocumentFilter>,
) -> Result<Json<Paginated<Document>>, AppError> {
    let documents =
        DocumentService::list_project_documents(&state.store, &principal, id, query).await?;

    Ok(Json(documents))
}

#[utoipa::path(
    post,
    path = "/api/documents",
    request_body = CreateDocumentDto,
    responses(
        (status = 201, description = "Document record created", body = Document),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot add documents", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_document(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateDocumentDto>,
) -> Result<(StatusCode, Json<Document>), AppError> {
    let document = DocumentService::create_document(&state.store, &principal, dto).await?;

    Ok((StatusCode::CREATED, Json(document)))
}

#[utoipa::path(
    get,
    path = "/api/documents/{id}",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 200, description = "Document details", body = Document),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Document belongs to another client", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_document(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<Json<Document>, AppError> {
    let document = DocumentService::get_document(&state.store, &principal, id).await?;

    Ok(Json(document))
}

#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    params(
        ("id" = Uuid, Path, description = "Document ID")
    ),
    responses(
        (status = 204, description = "Document record deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Clients cannot delete documents", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse)
    ),
    tag = "Documents",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_document(
    State(state): State<AppState>,
    AuthUser(principal): AuthUser,
    ValidatedPath(id): ValidatedPath<Uuid>,
) -> Result<StatusCode, AppError> {
    DocumentService::delete_document(&state.store, &principal, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
