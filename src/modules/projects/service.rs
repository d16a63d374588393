use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use plantdesk_auth::{Action, Principal, Resource, authorize};
use plantdesk_core::{AppError, ListQuery, Paginated};
use plantdesk_models::{CreateProjectDto, Project, ProjectFilter, UpdateProjectDto};
use plantdesk_store::Store;

use crate::metrics::{track_list_total, track_record_created, track_record_deleted};

pub struct ProjectService;

impl ProjectService {
    #[instrument(skip(store))]
    pub async fn list_projects(
        store: &Store,
        principal: &Principal,
        query: ListQuery<ProjectFilter>,
    ) -> Result<Paginated<Project>, AppError> {
        let access = authorize(principal, Resource::Projects, Action::Read)?;

        let (projects, total) = store.projects.fetch(&query, access.owner()).await;
        track_list_total("projects", total);

        Ok(Paginated::new(projects, total, query.page_request()))
    }

    /// Loads a project the caller may read.
    #[instrument(skip(store))]
    pub async fn get_project(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Project, AppError> {
        let access = authorize(principal, Resource::Projects, Action::Read)?;
        let project = Self::find(store, id).await?;
        access.check(Resource::Projects, Some(project.client_id))?;

        Ok(project)
    }

    #[instrument(skip(store))]
    pub async fn create_project(
        store: &Store,
        principal: &Principal,
        dto: CreateProjectDto,
    ) -> Result<Project, AppError> {
        authorize(principal, Resource::Projects, Action::Write)?;
        let _relations = store.lock_relations().await;
        Self::ensure_contractor(store, dto.contractor_id).await?;

        let now = Utc::now();
        let project = Project {
            id: Uuid::new_v4(),
            title: dto.title,
            description: dto.description,
            status: dto.status.unwrap_or_default(),
            category: dto.category,
            campus: dto.campus,
            building: dto.building,
            is_emergency: dto.is_emergency.unwrap_or(false),
            budget_cents: dto.budget_cents.unwrap_or(0),
            client_id: dto.client_id,
            contractor_id: dto.contractor_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            metadata: dto.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let project = store.projects.insert(project).await?;
        track_record_created("projects");
        tracing::info!(project_id = %project.id, client_id = %project.client_id, "Project created");

        Ok(project)
    }

    #[instrument(skip(store))]
    pub async fn update_project(
        store: &Store,
        principal: &Principal,
        id: Uuid,
        dto: UpdateProjectDto,
    ) -> Result<Project, AppError> {
        let access = authorize(principal, Resource::Projects, Action::Write)?;
        let existing = Self::find(store, id).await?;
        access.check(Resource::Projects, Some(existing.client_id))?;

        let _relations = store.lock_relations().await;
        Self::ensure_contractor(store, dto.contractor_id).await?;

        store
            .projects
            .update(id, |mut project| -> Result<Project, AppError> {
                if let Some(title) = dto.title {
                    project.title = title;
                }
                if let Some(description) = dto.description {
                    project.description = Some(description);
                }
                if let Some(status) = dto.status {
                    project.status = status;
                }
                if let Some(category) = dto.category {
                    project.category = category;
                }
                if let Some(campus) = dto.campus {
                    project.campus = campus;
                }
                if let Some(building) = dto.building {
                    project.building = Some(building);
                }
                if let Some(is_emergency) = dto.is_emergency {
                    project.is_emergency = is_emergency;
                }
                if let Some(budget_cents) = dto.budget_cents {
                    project.budget_cents = budget_cents;
                }
                if dto.contractor_id.is_some() {
                    project.contractor_id = dto.contractor_id;
                }
                if dto.start_date.is_some() {
                    project.start_date = dto.start_date;
                }
                if dto.end_date.is_some() {
                    project.end_date = dto.end_date;
                }
                if let Some(metadata) = dto.metadata {
                    project.metadata = metadata;
                }

                project.check_schedule()?;
                project.updated_at = Utc::now();
                Ok(project)
            })
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Project not found")))
    }

    /// Deletes a project together with its documents and media.
    #[instrument(skip(store))]
    pub async fn delete_project(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(), AppError> {
        let access = authorize(principal, Resource::Projects, Action::Write)?;
        let existing = Self::find(store, id).await?;
        access.check(Resource::Projects, Some(existing.client_id))?;

        let _relations = store.lock_relations().await;
        if store.projects.remove(id).await.is_none() {
            return Err(AppError::not_found(anyhow!("Project not found")));
        }
        let documents = store.documents.remove_where(|d| d.project_id == id).await;
        let media = store.media.remove_where(|m| m.project_id == id).await;

        track_record_deleted("projects");
        tracing::info!(project_id = %id, documents, media, "Project deleted");

        Ok(())
    }

    pub(crate) async fn find(store: &Store, id: Uuid) -> Result<Project, AppError> {
        store
            .projects
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Project not found")))
    }

    async fn ensure_contractor(store: &Store, contractor_id: Option<Uuid>) -> Result<(), AppError> {
        let Some(contractor_id) = contractor_id else {
            return Ok(());
        };

        if store.contractors.get(contractor_id).await.is_none() {
            return Err(AppError::unprocessable(anyhow!(
                "contractor_id does not reference an existing contractor"
            ))
            .with_field("contractor_id"));
        }

        Ok(())
    }
}
