//! The [`Record`] trait and its implementations for every resource.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use plantdesk_core::FilterSet;
use plantdesk_models::{
    Contractor, ContractorFilter, Document, DocumentFilter, Media, MediaFilter, Project,
    ProjectFilter, Setting, SettingFilter,
};

/// A comparable value extracted from a record for sorting.
///
/// `Missing` orders before every present value. Text compares
/// case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Missing,
    Bool(bool),
    Int(i64),
    Date(NaiveDate),
    Time(DateTime<Utc>),
    Text(String),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_lowercase())
    }
}

impl From<Option<NaiveDate>> for SortKey {
    fn from(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Missing, Self::Date)
    }
}

/// A storable resource row.
pub trait Record: Clone + Send + Sync + 'static {
    type Filter: FilterSet + Send + Sync;

    /// Resource name used in logs and errors.
    const RESOURCE: &'static str;

    fn id(&self) -> Uuid;

    /// Owning client, for client-scoped reads.
    fn owner(&self) -> Option<Uuid>;

    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Sort value for `field`; unknown fields yield [`SortKey::Missing`].
    fn sort_key(&self, field: &str) -> SortKey;
}

impl Record for Project {
    type Filter = ProjectFilter;
    const RESOURCE: &'static str = "project";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Option<Uuid> {
        Some(self.client_id)
    }

    fn matches(&self, filter: &ProjectFilter) -> bool {
        filter.matches(self)
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "created_at" => SortKey::Time(self.created_at),
            "updated_at" => SortKey::Time(self.updated_at),
            "title" => SortKey::text(&self.title),
            "status" => SortKey::text(self.status.as_str()),
            "start_date" => self.start_date.into(),
            "budget" => SortKey::Int(self.budget_cents),
            _ => SortKey::Missing,
        }
    }
}

impl Record for Contractor {
    type Filter = ContractorFilter;
    const RESOURCE: &'static str = "contractor";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Option<Uuid> {
        None
    }

    fn matches(&self, filter: &ContractorFilter) -> bool {
        filter.matches(self)
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "created_at" => SortKey::Time(self.created_at),
            "updated_at" => SortKey::Time(self.updated_at),
            "name" => SortKey::text(&self.name),
            _ => SortKey::Missing,
        }
    }
}

impl Record for Document {
    type Filter = DocumentFilter;
    const RESOURCE: &'static str = "document";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Option<Uuid> {
        Some(self.owner_id)
    }

    fn matches(&self, filter: &DocumentFilter) -> bool {
        filter.matches(self)
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "created_at" => SortKey::Time(self.created_at),
            "updated_at" => SortKey::Time(self.updated_at),
            "title" => SortKey::text(&self.title),
            _ => SortKey::Missing,
        }
    }
}

impl Record for Media {
    type Filter = MediaFilter;
    const RESOURCE: &'static str = "media";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Option<Uuid> {
        Some(self.owner_id)
    }

    fn matches(&self, filter: &MediaFilter) -> bool {
        filter.matches(self)
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "created_at" => SortKey::Time(self.created_at),
            _ => SortKey::Missing,
        }
    }
}

impl Record for Setting {
    type Filter = SettingFilter;
    const RESOURCE: &'static str = "setting";

    fn id(&self) -> Uuid {
        self.id
    }

    fn owner(&self) -> Option<Uuid> {
        None
    }

    fn matches(&self, filter: &SettingFilter) -> bool {
        filter.matches(self)
    }

    fn sort_key(&self, field: &str) -> SortKey {
        match field {
            "created_at" => SortKey::Time(self.created_at),
            "updated_at" => SortKey::Time(self.updated_at),
            "key" => SortKey::Text(self.key.clone()),
            _ => SortKey::Missing,
        }
    }
}
