//! Contractor domain models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use plantdesk_core::query::fields;
use plantdesk_core::{AppError, FilterSet, RawParams};

use crate::metadata::{Metadata, validate_metadata};

define_enum! {
    Trade {
        General => "general",
        Electrical => "electrical",
        Plumbing => "plumbing",
        Hvac => "hvac",
        Roofing => "roofing",
        Landscaping => "landscaping",
        Other => "other",
    }
}

define_enum! {
    /// Whether the office may assign new work to the contractor.
    ContractorStatus {
        Active => "active",
        Inactive => "inactive",
        Suspended => "suspended",
    }
}

impl Default for ContractorStatus {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Contractor {
    pub id: Uuid,
    pub name: String,
    pub trade: Trade,
    pub status: ContractorStatus,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContractorDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    pub trade: Trade,
    /// Defaults to `active`
    pub status: Option<ContractorStatus>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateContractorDto {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    pub trade: Option<Trade>,
    pub status: Option<ContractorStatus>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 3, max = 32, message = "phone must be 3-32 characters"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractorFilter {
    pub name: Option<String>,
    pub trade: Option<Trade>,
    pub status: Option<ContractorStatus>,
}

impl FilterSet for ContractorFilter {
    const SORT_FIELDS: &'static [&'static str] = &["created_at", "updated_at", "name"];

    fn from_params(params: &RawParams) -> Result<Self, AppError> {
        Ok(Self {
            name: fields::text(params, "name"),
            trade: fields::enumeration(params, "trade")?,
            status: fields::enumeration(params, "status")?,
        })
    }
}

impl ContractorFilter {
    pub fn matches(&self, contractor: &Contractor) -> bool {
        self.name
            .as_deref()
            .is_none_or(|name| crate::contains_ignore_case(&contractor.name, name))
            && self.trade.is_none_or(|trade| contractor.trade == trade)
            && self.status.is_none_or(|status| contractor.status == status)
    }
}

/// Contractor filters, for API documentation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContractorFilterParams {
    /// Case-insensitive substring of the name
    pub name: Option<String>,
    pub trade: Option<Trade>,
    pub status: Option<ContractorStatus>,
}
