//! Project domain models and DTOs.
//!
//! A project is a unit of construction or repair work requested by a client
//! department. The requesting client owns the project and, through it, every
//! document and media record attached to it.

use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use plantdesk_core::query::fields;
use plantdesk_core::{AppError, FilterSet, RawParams};

use crate::metadata::{Metadata, validate_metadata};

define_enum! {
    /// Lifecycle stage of a project.
    ProjectStatus {
        Planning => "planning",
        Bidding => "bidding",
        InProgress => "in_progress",
        OnHold => "on_hold",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

define_enum! {
    ProjectCategory {
        Construction => "construction",
        Renovation => "renovation",
        Repair => "repair",
        Maintenance => "maintenance",
        Inspection => "inspection",
    }
}

/// Project entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub category: ProjectCategory,
    /// Campus the work takes place on
    pub campus: String,
    pub building: Option<String>,
    /// Emergency work skips the bidding stage
    pub is_emergency: bool,
    /// Approved budget in cents
    pub budget_cents: i64,
    /// Requesting client; owner of the project
    pub client_id: Uuid,
    /// Assigned contractor, if any
    pub contractor_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[schema(value_type = Object)]
    pub metadata: Metadata,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Fails when the end date precedes the start date.
    pub fn check_schedule(&self) -> Result<(), AppError> {
        check_dates(self.start_date, self.end_date).map_err(|_| {
            AppError::unprocessable(anyhow!(SCHEDULE_MESSAGE)).with_field("end_date")
        })
    }
}

const SCHEDULE_MESSAGE: &str = "end_date must not be before start_date";

fn check_dates(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        let mut err = ValidationError::new("schedule");
        err.message = Some(SCHEDULE_MESSAGE.into());
        return Err(err);
    }
    Ok(())
}

fn validate_create_schedule(dto: &CreateProjectDto) -> Result<(), ValidationError> {
    check_dates(dto.start_date, dto.end_date)
}

fn validate_update_schedule(dto: &UpdateProjectDto) -> Result<(), ValidationError> {
    check_dates(dto.start_date, dto.end_date)
}

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_create_schedule"))]
pub struct CreateProjectDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: String,
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub description: Option<String>,
    /// Defaults to `planning`
    pub status: Option<ProjectStatus>,
    pub category: ProjectCategory,
    #[validate(length(min = 1, max = 100, message = "campus must be 1-100 characters"))]
    pub campus: String,
    #[validate(length(max = 100, message = "building must be at most 100 characters"))]
    pub building: Option<String>,
    pub is_emergency: Option<bool>,
    #[validate(range(min = 0, message = "budget_cents must not be negative"))]
    pub budget_cents: Option<i64>,
    pub client_id: Uuid,
    pub contractor_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

/// DTO for updating a project. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_update_schedule"))]
pub struct UpdateProjectDto {
    #[validate(length(min = 1, max = 200, message = "title must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(max = 5000, message = "description must be at most 5000 characters"))]
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub category: Option<ProjectCategory>,
    #[validate(length(min = 1, max = 100, message = "campus must be 1-100 characters"))]
    pub campus: Option<String>,
    #[validate(length(max = 100, message = "building must be at most 100 characters"))]
    pub building: Option<String>,
    pub is_emergency: Option<bool>,
    #[validate(range(min = 0, message = "budget_cents must not be negative"))]
    pub budget_cents: Option<i64>,
    pub contractor_id: Option<Uuid>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(custom(function = "validate_metadata"))]
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<Metadata>,
}

/// Filters accepted by `GET /api/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub category: Option<ProjectCategory>,
    pub campus: Option<String>,
    pub is_emergency: Option<bool>,
    pub title: Option<String>,
    pub client_id: Option<Uuid>,
    pub contractor_id: Option<Uuid>,
    pub start_from: Option<NaiveDate>,
    pub start_to: Option<NaiveDate>,
}

impl FilterSet for ProjectFilter {
    const SORT_FIELDS: &'static [&'static str] = &[
        "created_at",
        "updated_at",
        "title",
        "status",
        "start_date",
        "budget",
    ];

    fn from_params(params: &RawParams) -> Result<Self, AppError> {
        let (start_from, start_to) = fields::date_range(params, "start_from", "start_to")?;

        Ok(Self {
            status: fields::enumeration(params, "status")?,
            category: fields::enumeration(params, "category")?,
            campus: fields::text(params, "campus"),
            is_emergency: fields::boolean(params, "is_emergency")?,
            title: fields::text(params, "title"),
            client_id: fields::uuid(params, "client_id")?,
            contractor_id: fields::uuid(params, "contractor_id")?,
            start_from,
            start_to,
        })
    }
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        if self.status.is_some_and(|status| project.status != status) {
            return false;
        }
        if self.category.is_some_and(|category| project.category != category) {
            return false;
        }
        if let Some(campus) = &self.campus
            && !project.campus.eq_ignore_ascii_case(campus)
        {
            return false;
        }
        if self.is_emergency.is_some_and(|flag| project.is_emergency != flag) {
            return false;
        }
        if let Some(title) = &self.title
            && !crate::contains_ignore_case(&project.title, title)
        {
            return false;
        }
        if self.client_id.is_some_and(|id| project.client_id != id) {
            return false;
        }
        if self.contractor_id.is_some() && project.contractor_id != self.contractor_id {
            return false;
        }
        if self.start_from.is_some() || self.start_to.is_some() {
            let Some(start) = project.start_date else {
                return false;
            };
            if self.start_from.is_some_and(|from| start < from)
                || self.start_to.is_some_and(|to| start > to)
            {
                return false;
            }
        }
        true
    }
}

/// Project filters, for API documentation.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectFilterParams {
    pub status: Option<ProjectStatus>,
    pub category: Option<ProjectCategory>,
    /// Exact campus name, case-insensitive
    pub campus: Option<String>,
    pub is_emergency: Option<bool>,
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    pub client_id: Option<Uuid>,
    pub contractor_id: Option<Uuid>,
    /// Earliest start date (YYYY-MM-DD), inclusive
    pub start_from: Option<NaiveDate>,
    /// Latest start date (YYYY-MM-DD), inclusive
    pub start_to: Option<NaiveDate>,
}
