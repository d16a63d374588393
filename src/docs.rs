use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use plantdesk_auth::Role;
use plantdesk_core::errors::ErrorResponse;
use plantdesk_core::{ErrorKind, PaginationMeta, SortOrder};
use plantdesk_models::{
    Contractor, ContractorStatus, CreateContractorDto, CreateDocumentDto, CreateMediaDto,
    CreateProjectDto, CreateSettingDto, Document, DocumentCategory, Media, MediaKind, Project,
    ProjectCategory, ProjectStatus, Setting, Trade, UpdateContractorDto, UpdateProjectDto,
    UpdateSettingDto,
};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health,
        crate::modules::projects::controller::get_projects,
        crate::modules::projects::controller::create_project,
        crate::modules::projects::controller::get_project,
        crate::modules::projects::controller::update_project,
        crate::modules::projects::controller::delete_project,
        crate::modules::documents::controller::get_project_documents,
        crate::modules::media::controller::get_project_media,
        crate::modules::contractors::controller::get_contractors,
        crate::modules::contractors::controller::create_contractor,
        crate::modules::contractors::controller::get_contractor,
        crate::modules::contractors::controller::update_contractor,
        crate::modules::contractors::controller::delete_contractor,
        crate::modules::documents::controller::get_documents,
        crate::modules::documents::controller::create_document,
        crate::modules::documents::controller::get_document,
        crate::modules::documents::controller::delete_document,
        crate::modules::media::controller::get_media_list,
        crate::modules::media::controller::create_media,
        crate::modules::media::controller::get_media,
        crate::modules::media::controller::delete_media,
        crate::modules::settings::controller::get_settings,
        crate::modules::settings::controller::create_setting,
        crate::modules::settings::controller::get_setting,
        crate::modules::settings::controller::update_setting,
        crate::modules::settings::controller::delete_setting,
    ),
    components(
        schemas(
            Project,
            ProjectStatus,
            ProjectCategory,
            CreateProjectDto,
            UpdateProjectDto,
            Contractor,
            Trade,
            ContractorStatus,
            CreateContractorDto,
            UpdateContractorDto,
            Document,
            DocumentCategory,
            CreateDocumentDto,
            Media,
            MediaKind,
            CreateMediaDto,
            Setting,
            CreateSettingDto,
            UpdateSettingDto,
            PaginationMeta,
            SortOrder,
            ErrorResponse,
            ErrorKind,
            Role,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Projects", description = "Construction and renovation projects"),
        (name = "Contractors", description = "Contractor directory (staff only)"),
        (name = "Documents", description = "Documents attached to projects"),
        (name = "Media", description = "Photos and videos attached to projects"),
        (name = "Settings", description = "Office-wide settings (staff only)")
    ),
    info(
        title = "PlantDesk API",
        version = "0.1.0",
        description = "Project management API for a campus physical-plant office, built with Rust and Axum.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
