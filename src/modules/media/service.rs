use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use plantdesk_auth::{Action, Principal, Resource, authorize};
use plantdesk_core::{AppError, ListQuery, Paginated};
use plantdesk_models::{CreateMediaDto, Media, MediaFilter};
use plantdesk_store::Store;

use crate::metrics::{track_list_total, track_record_created, track_record_deleted};
use crate::modules::projects::service::ProjectService;

pub struct MediaService;

impl MediaService {
    #[instrument(skip(store))]
    pub async fn list_media(
        store: &Store,
        principal: &Principal,
        query: ListQuery<MediaFilter>,
    ) -> Result<Paginated<Media>, AppError> {
        let access = authorize(principal, Resource::Media, Action::Read)?;

        let (media, total) = store.media.fetch(&query, access.owner()).await;
        track_list_total("media", total);

        Ok(Paginated::new(media, total, query.page_request()))
    }

    /// Lists one project's media; the path's project overrides any
    /// `project_id` filter.
    #[instrument(skip(store))]
    pub async fn list_project_media(
        store: &Store,
        principal: &Principal,
        project_id: Uuid,
        query: ListQuery<MediaFilter>,
    ) -> Result<Paginated<Media>, AppError> {
        ProjectService::get_project(store, principal, project_id).await?;

        let query = query.map_filters(|filter| MediaFilter {
            project_id: Some(project_id),
            ..filter
        });

        Self::list_media(store, principal, query).await
    }

    #[instrument(skip(store))]
    pub async fn get_media(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Media, AppError> {
        let access = authorize(principal, Resource::Media, Action::Read)?;
        let media = Self::find(store, id).await?;
        access.check(Resource::Media, Some(media.owner_id))?;

        Ok(media)
    }

    /// Attaches a media record to a project; the owner is the project's client.
    #[instrument(skip(store))]
    pub async fn create_media(
        store: &Store,
        principal: &Principal,
        dto: CreateMediaDto,
    ) -> Result<Media, AppError> {
        authorize(principal, Resource::Media, Action::Write)?;

        let _relations = store.lock_relations().await;
        let project = ProjectService::find(store, dto.project_id).await?;

        let now = Utc::now();
        let media = Media {
            id: Uuid::new_v4(),
            project_id: project.id,
            owner_id: project.client_id,
            kind: dto.kind,
            caption: dto.caption,
            url: dto.url,
            metadata: dto.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let media = store.media.insert(media).await?;
        track_record_created("media");

        Ok(media)
    }

    #[instrument(skip(store))]
    pub async fn delete_media(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(), AppError> {
        let access = authorize(principal, Resource::Media, Action::Write)?;
        let media = Self::find(store, id).await?;
        access.check(Resource::Media, Some(media.owner_id))?;

        store
            .media
            .remove(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Media not found")))?;
        track_record_deleted("media");

        Ok(())
    }

    async fn find(store: &Store, id: Uuid) -> Result<Media, AppError> {
        store
            .media
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Media not found")))
    }
}
