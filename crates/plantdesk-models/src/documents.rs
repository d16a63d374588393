//! Project document records.
//!
//! A document points at a file stored elsewhere (`url`). Its owner is copied
//! from the project's client when the record is created.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use plantdesk_core::query::fields;
use plantdesk_core::{AppError, FilterSet, RawParams};

use crate::metadata::{Metadata, validate_metadata};

define_enum! {
    DocumentCategory {
        Contract => "contract",
        Permit => "permit",
        Invoice => "invoice",
        Drawing => "drawing",
        Report => "report",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Document {
    pub id: Uuid,
    pub project_id: Uuid,
    /// Client owning the parent project
    pub owner_id: Uuid,
    pub title: String,
    pub category: DocumentCategory,
    /// Location of the stored file
    pub url: String,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateDocumentDto {
    pub project_id: Uuid,
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    pub category: DocumentCategory,
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFilter {
    pub project_id: Option<Uuid>,
    pub category: Option<DocumentCategory>,
    pub title: Option<String>,
}

impl FilterSet for DocumentFilter {
    const SORT_FIELDS: &'static [&'static str] = &["created_at", "updated_at", "title"];

    fn from_params(params: &RawParams) -> Result<Self, AppError> {
        Ok(Self {
            project_id: fields::uuid(params, "project_id")?,
            category: fields::enumeration(params, "category")?,
            title: fields::text(params, "title"),
        })
    }
}

impl DocumentFilter {
    pub fn matches(&self, document: &Document) -> bool {
        self.project_id.is_none_or(|id| document.project_id == id)
            && self.category.is_none_or(|category| document.category == category)
            && self
                .title
                .as_deref()
                .is_none_or(|title| crate::contains_ignore_case(&document.title, title))
    }
}

/// Document filters, for API documentation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DocumentFilterParams {
    pub project_id: Option<Uuid>,
    pub category: Option<DocumentCategory>,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        let now = Utc::now();
        let project_id = Uuid::new_v4();
        let document = Document {
            id: Uuid::new_v4(),
            project_id,
            owner_id: Uuid::new_v4(),
            title: "Building Permit B-1142".to_string(),
            category: DocumentCategory::Permit,
            url: "https://files.example.edu/permits/b-1142.pdf".to_string(),
            metadata: Metadata::new(),
            created_at: now,
            updated_at: now,
        };

        let filter = DocumentFilter {
            project_id: Some(project_id),
            category: Some(DocumentCategory::Permit),
            title: Some("permit".to_string()),
        };
        assert!(filter.matches(&document));

        let other_project = DocumentFilter {
            project_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        assert!(!other_project.matches(&document));
    }

    #[test]
    fn test_create_dto_requires_url() {
        let dto = CreateDocumentDto {
            project_id: Uuid::new_v4(),
            title: "Signed contract".to_string(),
            category: DocumentCategory::Contract,
            url: "not a url".to_string(),
            metadata: None,
        };
        let err = AppError::from_validation_errors(&dto.validate().unwrap_err());
        assert_eq!(err.field.as_deref(), Some("url"));
        assert_eq!(err.message(), "url must be a valid URL");

        let dto = CreateDocumentDto {
            url: "https://files.example.edu/contracts/88.pdf".to_string(),
            ..dto
        };
        assert!(dto.validate().is_ok());
    }
}
