//! Project media records (site photos, walkthrough videos, voice notes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use plantdesk_core::query::fields;
use plantdesk_core::{AppError, FilterSet, RawParams};

use crate::metadata::{Metadata, validate_metadata};

define_enum! {
    MediaKind {
        Photo => "photo",
        Video => "video",
        Audio => "audio",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Media {
    pub id: Uuid,
    pub project_id: Uuid,
    pub owner_id: Uuid,
    pub kind: MediaKind,
    pub caption: Option<String>,
    pub url: String,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateMediaDto {
    pub project_id: Uuid,
    pub kind: MediaKind,
    #[validate(length(max = 500, message = "caption must be at most 500 characters"))]
    pub caption: Option<String>,
    #[validate(url(message = "url must be a valid URL"))]
    pub url: String,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaFilter {
    pub project_id: Option<Uuid>,
    pub kind: Option<MediaKind>,
}

impl FilterSet for MediaFilter {
    const SORT_FIELDS: &'static [&'static str] = &["created_at"];

    fn from_params(params: &RawParams) -> Result<Self, AppError> {
        Ok(Self {
            project_id: fields::uuid(params, "project_id")?,
            kind: fields::enumeration(params, "kind")?,
        })
    }
}

impl MediaFilter {
    pub fn matches(&self, media: &Media) -> bool {
        self.project_id.is_none_or(|id| media.project_id == id)
            && self.kind.is_none_or(|kind| media.kind == kind)
    }
}

/// Media filters, for API documentation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MediaFilterParams {
    pub project_id: Option<Uuid>,
    pub kind: Option<MediaKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_kind() {
        let params: RawParams = [("kind".to_string(), "Photo".to_string())].into();
        let filter = MediaFilter::from_params(&params).unwrap();
        assert_eq!(filter.kind, Some(MediaKind::Photo));

        let params: RawParams = [("kind".to_string(), "image".to_string())].into();
        let err = MediaFilter::from_params(&params).unwrap_err();
        assert_eq!(err.message(), "kind must be one of: photo, video, audio");
    }

    #[test]
    fn test_caption_length() {
        let dto = CreateMediaDto {
            project_id: Uuid::new_v4(),
            kind: MediaKind::Photo,
            caption: Some("x".repeat(501)),
            url: "https://files.example.edu/media/1.jpg".to_string(),
            metadata: None,
        };
        assert!(dto.validate().is_err());
    }
}
