use anyhow::anyhow;
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;

use plantdesk_auth::{Action, Principal, Resource, authorize};
use plantdesk_core::{AppError, ListQuery, Paginated};
use plantdesk_models::{Contractor, ContractorFilter, CreateContractorDto, UpdateContractorDto};
use plantdesk_store::Store;

use crate::metrics::{track_list_total, track_record_created, track_record_deleted};

pub struct ContractorService;

impl ContractorService {
    #[instrument(skip(store))]
    pub async fn list_contractors(
        store: &Store,
        principal: &Principal,
        query: ListQuery<ContractorFilter>,
    ) -> Result<Paginated<Contractor>, AppError> {
        let access = authorize(principal, Resource::Contractors, Action::Read)?;

        let (contractors, total) = store.contractors.fetch(&query, access.owner()).await;
        track_list_total("contractors", total);

        Ok(Paginated::new(contractors, total, query.page_request()))
    }

    #[instrument(skip(store))]
    pub async fn get_contractor(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<Contractor, AppError> {
        authorize(principal, Resource::Contractors, Action::Read)?;
        let contractor = Self::find(store, id).await?;

        Ok(contractor)
    }

    #[instrument(skip(store))]
    pub async fn create_contractor(
        store: &Store,
        principal: &Principal,
        dto: CreateContractorDto,
    ) -> Result<Contractor, AppError> {
        authorize(principal, Resource::Contractors, Action::Write)?;

        let now = Utc::now();
        let contractor = Contractor {
            id: Uuid::new_v4(),
            name: dto.name,
            trade: dto.trade,
            status: dto.status.unwrap_or_default(),
            email: dto.email,
            phone: dto.phone,
            metadata: dto.metadata.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let contractor = store.contractors.insert(contractor).await?;
        track_record_created("contractors");

        Ok(contractor)
    }

    #[instrument(skip(store))]
    pub async fn update_contractor(
        store: &Store,
        principal: &Principal,
        id: Uuid,
        dto: UpdateContractorDto,
    ) -> Result<Contractor, AppError> {
        authorize(principal, Resource::Contractors, Action::Write)?;
        Self::find(store, id).await?;

        let updated = store
            .contractors
            .update(id, |mut contractor| -> Result<Contractor, AppError> {
                if let Some(name) = dto.name {
                    contractor.name = name;
                }
                if let Some(trade) = dto.trade {
                    contractor.trade = trade;
                }
                if let Some(status) = dto.status {
                    contractor.status = status;
                }
                if let Some(email) = dto.email {
                    contractor.email = Some(email);
                }
                if let Some(phone) = dto.phone {
                    contractor.phone = Some(phone);
                }
                if let Some(metadata) = dto.metadata {
                    contractor.metadata = metadata;
                }
                contractor.updated_at = Utc::now();
                Ok(contractor)
            })
            .await?;

        updated.ok_or_else(|| AppError::not_found(anyhow!("Contractor not found")))
    }

    /// Fails with a conflict while any project is assigned to the contractor.
    #[instrument(skip(store))]
    pub async fn delete_contractor(
        store: &Store,
        principal: &Principal,
        id: Uuid,
    ) -> Result<(), AppError> {
        authorize(principal, Resource::Contractors, Action::Write)?;
        Self::find(store, id).await?;

        let _relations = store.lock_relations().await;
        if store
            .projects
            .any(|project| project.contractor_id == Some(id))
            .await
        {
            return Err(AppError::conflict(anyhow!(
                "Contractor is assigned to one or more projects"
            )));
        }

        store
            .contractors
            .remove(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Contractor not found")))?;
        track_record_deleted("contractors");

        Ok(())
    }

    async fn find(store: &Store, id: Uuid) -> Result<Contractor, AppError> {
        store
            .contractors
            .get(id)
            .await
            .ok_or_else(|| AppError::not_found(anyhow!("Contractor not found")))
    }
}
