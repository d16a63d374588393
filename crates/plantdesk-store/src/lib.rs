//! # PlantDesk Store
//!
//! The storage collaborator behind every list and detail endpoint.
//!
//! A [`Store`] holds one [`Collection`] per resource. It is built once by the
//! composition root, either empty or from a [`Fixture`] file, and shared with
//! handlers as `Arc<Store>`.
//!
//! # Fetch contract
//!
//! [`Collection::fetch`] answers a validated list query in this order:
//!
//! 1. owner predicate (client-scoped reads)
//! 2. resource filters
//! 3. sort by the requested field, ties broken by id
//! 4. count the filtered total
//! 5. slice out the requested page
//!
//! Because counting happens after the owner predicate, `meta.total` only
//! covers rows the caller is allowed to see.
//!
//! # Cross-collection writes
//!
//! Each collection locks on its own. Writes that check one collection and
//! change another (attaching a document to a project, deleting a project with
//! its attachments, deleting a contractor no project references) hold
//! [`Store::lock_relations`] across both steps.

mod collection;
mod error;
mod fixture;
mod record;

pub use collection::Collection;
pub use error::StoreError;
pub use fixture::Fixture;
pub use record::{Record, SortKey};

use std::path::Path;

use tokio::sync::{Mutex, MutexGuard};

use plantdesk_models::{Contractor, Document, Media, Project, Setting};

/// All resource collections.
#[derive(Debug, Default)]
pub struct Store {
    pub projects: Collection<Project>,
    pub contractors: Collection<Contractor>,
    pub documents: Collection<Document>,
    pub media: Collection<Media>,
    pub settings: Collection<Setting>,
    relations: Mutex<()>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from fixture rows.
    ///
    /// Fails on duplicate ids within a collection or duplicate setting keys.
    pub fn from_fixture(fixture: Fixture) -> Result<Self, StoreError> {
        let mut keys = std::collections::HashSet::new();
        for setting in &fixture.settings {
            if !keys.insert(setting.key.as_str()) {
                return Err(StoreError::Conflict(format!(
                    "setting key `{}` appears more than once",
                    setting.key
                )));
            }
        }

        Ok(Self {
            projects: Collection::from_rows(fixture.projects)?,
            contractors: Collection::from_rows(fixture.contractors)?,
            documents: Collection::from_rows(fixture.documents)?,
            media: Collection::from_rows(fixture.media)?,
            settings: Collection::from_rows(fixture.settings)?,
            relations: Mutex::default(),
        })
    }

    /// Serializes writes that span collections.
    ///
    /// Hold the guard from the parent lookup until the dependent write is
    /// done.
    pub async fn lock_relations(&self) -> MutexGuard<'_, ()> {
        self.relations.lock().await
    }

    /// Reads a fixture file and builds a store from it.
    #[tracing::instrument]
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let fixture = Fixture::read(path).await?;
        let store = Self::from_fixture(fixture)?;

        tracing::info!(
            projects = store.projects.len().await,
            contractors = store.contractors.len().await,
            documents = store.documents.len().await,
            media = store.media.len().await,
            settings = store.settings.len().await,
            "Loaded fixture"
        );

        Ok(store)
    }
}
