//! Office-wide settings stored as key/value pairs.
//!
//! Keys are unique and immutable once created; values are arbitrary JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use plantdesk_core::query::fields;
use plantdesk_core::{AppError, FilterSet, RawParams};

pub const MAX_KEY_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Setting {
    pub id: Uuid,
    /// Unique key, e.g. `fiscal_year.start_month`
    pub key: String,
    pub value: Value,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Keys are lowercase ASCII letters, digits, `.`, `_` and `-`.
pub fn validate_setting_key(key: &str) -> Result<(), ValidationError> {
    let well_formed = !key.is_empty()
        && key.len() <= MAX_KEY_LENGTH
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '_' | '-'));

    if well_formed {
        return Ok(());
    }

    let mut err = ValidationError::new("setting_key");
    err.message = Some(
        format!(
            "key must be 1-{} characters of a-z, 0-9, '.', '_' or '-'",
            MAX_KEY_LENGTH
        )
        .into(),
    );
    Err(err)
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateSettingDto {
    #[validate(custom(function = "validate_setting_key"))]
    pub key: String,
    pub value: Value,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateSettingDto {
    pub value: Option<Value>,
    #[validate(length(max = 500, message = "description must be at most 500 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingFilter {
    /// Substring of the key
    pub name: Option<String>,
}

impl FilterSet for SettingFilter {
    const SORT_FIELDS: &'static [&'static str] = &["created_at", "updated_at", "key"];

    fn from_params(params: &RawParams) -> Result<Self, AppError> {
        Ok(Self {
            name: fields::text(params, "name"),
        })
    }
}

impl SettingFilter {
    pub fn matches(&self, setting: &Setting) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| crate::contains_ignore_case(&setting.key, name))
    }
}

/// Setting filters, for API documentation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SettingFilterParams {
    /// Case-insensitive substring of the key
    pub name: Option<String>,
}
