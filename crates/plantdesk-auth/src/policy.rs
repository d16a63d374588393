//! The access policy.
//!
//! All permission decisions go through [`authorize`] and [`Access::check`];
//! handlers never branch on roles themselves.
//!
//! | Resource | Admin | Manager | Client |
//! |----------|-------|---------|--------|
//! | projects, documents, media | read/write | read/write | read owned only |
//! | contractors | read/write | read/write | none |
//! | settings | read/write | read | none |
//!
//! A client's collection reads come back as [`Access::Owned`]; the owner
//! predicate must be applied by the store before counting and paging so the
//! envelope total only covers rows the client may see.
//!
//! Single-record operations call [`authorize`] before looking the record up,
//! then [`Access::check`] the owner of what they found. A role that may not
//! touch a resource at all is refused without learning whether the record
//! exists; a client reading its own resource types still gets 404 for
//! missing records.

use std::fmt;

use uuid::Uuid;

use plantdesk_core::AppError;

use crate::claims::Principal;
use crate::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Projects,
    Contractors,
    Documents,
    Media,
    Settings,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Contractors => "contractors",
            Self::Documents => "documents",
            Self::Media => "media",
            Self::Settings => "settings",
        }
    }

    /// Whether records of this resource carry an owning client.
    fn client_owned(&self) -> bool {
        matches!(self, Self::Projects | Self::Documents | Self::Media)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Write,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Outcome of a granted permission check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Every record is visible.
    All,
    /// Only records owned by this principal are visible.
    Owned(Uuid),
}

impl Access {
    /// Owner predicate for store fetches.
    pub fn owner(&self) -> Option<Uuid> {
        match self {
            Self::All => None,
            Self::Owned(owner) => Some(*owner),
        }
    }

    pub fn permits(&self, owner: Option<Uuid>) -> bool {
        match self {
            Self::All => true,
            Self::Owned(principal) => owner == Some(*principal),
        }
    }

    /// Fails when the record owned by `owner` is outside this access.
    pub fn check(&self, resource: Resource, owner: Option<Uuid>) -> Result<(), AppError> {
        if self.permits(owner) {
            return Ok(());
        }
        Err(AppError::forbidden(format!(
            "Access denied. This {} record belongs to another client",
            resource
        )))
    }
}

/// Decides whether `principal` may perform `action` on `resource`.
pub fn authorize(
    principal: &Principal,
    resource: Resource,
    action: Action,
) -> Result<Access, AppError> {
    let access = match (principal.role, resource, action) {
        (Role::Admin, _, _) => Some(Access::All),
        (Role::Manager, Resource::Settings, Action::Write) => None,
        (Role::Manager, _, _) => Some(Access::All),
        (Role::Client, resource, Action::Read) if resource.client_owned() => {
            Some(Access::Owned(principal.id))
        }
        (Role::Client, _, _) => None,
    };

    access.ok_or_else(|| {
        tracing::debug!(
            principal = %principal.id,
            role = %principal.role,
            resource = %resource,
            action = action.as_str(),
            "Access denied"
        );
        AppError::forbidden(format!(
            "Access denied. Role {} cannot {} {}",
            principal.role,
            action.as_str(),
            resource
        ))
    })
}
