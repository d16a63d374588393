use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use plantdesk_auth::{Action, Principal, Resource, authorize};
use plantdesk_core::{AppError, ListQuery, Paginated};
use plantdesk_models::{CreateSettingDto, Setting, SettingFilter, UpdateSettingDto};
use plantdesk_store::{Store, StoreError};

use crate::metrics::{track_list_total, track_record_created, track_record_deleted};

pub struct SettingService;

impl SettingService {
    #[instrument(skip(store))]
    pub async fn list_settings(
        store: &Store,
        principal: &Principal,
        query: ListQuery<SettingFilter>,
    ) -> Result<Paginated<Setting>, AppError> {
        let access = authorize(principal, Resource::Settings, Action::Read)?;

        let (settings, total) = store.settings.fetch(&query, access.owner()).await;
        track_list_total("settings", total);

        Ok(Paginated::new(settings, total, query.page_request()))
    }

    #[instrument(skip(store))]
    pub async fn get_setting(
        store: &Store,
        principal: &Principal,
        key: &str,
    ) -> Result<Setting, AppError> {
        authorize(principal, Resource::Settings, Action::Read)?;
        let setting = Self::find(store, key).await?;

        Ok(setting)
    }

    /// Fails with a conflict when the key is already taken.
    #[instrument(skip(store))]
    pub async fn create_setting(
        store: &Store,
        principal: &Principal,
        dto: CreateSettingDto,
    ) -> Result<Setting, AppError> {
        authorize(principal, Resource::Settings, Action::Write)?;

        let key = dto.key.clone();
        let now = Utc::now();
        let setting = Setting {
            id: Uuid::new_v4(),
            key: dto.key,
            value: dto.value,
            description: dto.description,
            created_at: now,
            updated_at: now,
        };

        let setting = store
            .settings
            .insert_unless(setting, |existing| {
                (existing.key == key)
                    .then(|| format!("Setting with key '{}' already exists", key))
            })
            .await
            .map_err(|e| {
                if let StoreError::Conflict(message) = e {
                    return AppError::conflict(anyhow!(message));
                }
                AppError::from(e)
            })?;
        track_record_created("settings");

        tracing::info!(key = %setting.key, "Setting created");
        Ok(setting)
    }

    #[instrument(skip(store))]
    pub async fn update_setting(
        store: &Store,
        principal: &Principal,
        key: &str,
        dto: UpdateSettingDto,
    ) -> Result<Setting, AppError> {
        authorize(principal, Resource::Settings, Action::Write)?;
        let existing = Self::find(store, key).await?;

        let updated = store
            .settings
            .update(existing.id, |mut setting| -> Result<Setting, AppError> {
                if let Some(value) = dto.value {
                    setting.value = value;
                }
                if let Some(description) = dto.description {
                    setting.description = Some(description);
                }
                setting.updated_at = Utc::now();
                Ok(setting)
            })
            .await?;

        updated.ok_or_else(|| AppError::not_found(anyhow!("Setting not found")))
    }

    #[instrument(skip(store))]
    pub async fn delete_setting(
        store: &Store,
        principal: &Principal,
        key: &str,
    ) -> Result<(), AppError> {
        authorize(principal, Resource::Settings, Action::Write)?;
        let existing = Self::find(store, key).await?;

        store
            .settings
            .remove(existing.id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Setting not found")))?;
        track_record_deleted("settings");

        Ok(())
    }

    async fn find(store: &Store, key: &str) -> Result<Setting, AppError> {
        store
            .settings
            .find(|setting| setting.key == key)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Setting not found")))
    }
}
