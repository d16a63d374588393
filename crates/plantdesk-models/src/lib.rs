//! # PlantDesk Models
//!
//! Domain models, list filters and request DTOs for the PlantDesk API.
//!
//! # Modules
//!
//! - [`projects`]: Construction and repair projects
//! - [`contractors`]: Outside contractors
//! - [`documents`]: Project documents (contracts, permits, drawings)
//! - [`media`]: Project photos, videos and audio notes
//! - [`settings`]: Office-wide key/value settings
//! - [`metadata`]: Opaque per-record metadata
//!
//! Each resource module provides the entity, its [`FilterSet`] for list
//! endpoints, and validated create/update DTOs.
//!
//! [`FilterSet`]: plantdesk_core::FilterSet

#[macro_use]
mod macros;

pub mod contractors;
pub mod documents;
pub mod media;
pub mod metadata;
pub mod projects;
pub mod settings;

pub use macros::ParseEnumError;
pub use metadata::Metadata;

pub use projects::{
    CreateProjectDto, Project, ProjectCategory, ProjectFilter, ProjectFilterParams, ProjectStatus,
    UpdateProjectDto,
};

pub use contractors::{
    Contractor, ContractorFilter, ContractorFilterParams, ContractorStatus, CreateContractorDto,
    Trade, UpdateContractorDto,
};

pub use documents::{
    CreateDocumentDto, Document, DocumentCategory, DocumentFilter, DocumentFilterParams,
};

pub use media::{CreateMediaDto, Media, MediaFilter, MediaFilterParams, MediaKind};

pub use settings::{
    CreateSettingDto, Setting, SettingFilter, SettingFilterParams, UpdateSettingDto,
};

/// Case-insensitive substring test used by text filters.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
