use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use plantdesk_auth::{Action, Principal, Resource, authorize};
use plantdesk_core::{AppError, ListQuery, Paginated};
use plantdesk_models::{CreateDocumentDto, Document, DocumentFilter};
use plantdesk_store::Store;

use crate::metrics::{track_list_total, track_record_created, track_record_deleted};
use crate::modules::projects::service::ProjectService;

pub struct DocumentService;

impl DocumentService {
    #[instrument(skip(store))]
    pub async fn list_documents(
        store: &Store,
        principal: &Principal,
        query: ListQuery<DocumentFilter>,
    ) -> Result<Paginated<Document>, AppError> {
        let access = authorize(principal, Resource::Documents, Action::Read)?;

        let (documents, total) = store.documents.fetch(&query, access.owner()).await;
        track_list_total("documents", total);

        Ok(Paginated::new(documents, total, query.page_request()))
    }

    /// Lists one project's documents; the path's project overrides any
    /// `project_id` filter.
    #[instrument(skip(store))]
    pub async fn list_project_documents(
        store: &Store,
        principal: &Principal,
        project_id: Uuid,
        query: ListQuery<DocumentFilter>,
    ) -> Result<Paginated<Document>, AppError> {
        ProjectService::get_project(store, principal, project_id).await?;

        let query = query.map_filters(|filter| DocumentFilter {
            project_id: Some(project_id),
            ..filter
        });

        Self::list_documents(store, principal, query).await
    }

    #[instrument(skip(store))]
    pub async fn get_document(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Document, AppError> {
        let access = authorize(principal, Resource::Documents, Action::Read)?;
        let document = Self::find(store, id).await?;
        access.check(Resource::Documents, Some(document.owner_id))?;

        Ok(document)
    }

    /// Attaches a document to a project; the owner is the project's client.
    #[instrument(skip(store))]
    pub async fn create_document(
        store: &Store,
        principal: &Principal,
        dto: CreateDocumentDto,
    ) -> Result<Document, AppError> {
        authorize(principal, Resource::Documents, Action::Write)?;

        let _relations = store.lock_relations().await;
        let project = ProjectService::find(store, dto.project_id).await?;

        let now = Utc::now();
        let document = Document {
            id: Uuid::new_v4(),
            project_id: project.id,
            owner_id: project.client_id,
            title: dto.title,
            category: dto.category,
            url: dto.url,
            metadata: dto.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let document = store.documents.insert(document).await?;
        track_record_created("documents");

        Ok(document)
    }

    #[instrument(skip(store))]
    pub async fn delete_document(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(), AppError> {
        let access = authorize(principal, Resource::Documents, Action::Write)?;
        let document = Self::find(store, id).await?;
        access.check(Resource::Documents, Some(document.owner_id))?;

        store
            .documents
            .remove(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Document not found")))?;
        track_record_deleted("documents");

        Ok(())
    }

    async fn find(store: &Store, id: Uuid) -> Result<Document, AppError> {
        store
            .documents
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Document not found")))
    }
}
