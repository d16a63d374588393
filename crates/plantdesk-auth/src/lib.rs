//! # PlantDesk Auth
//!
//! Principal resolution and the access policy for the PlantDesk API.
//!
//! - [`role`]: The closed set of roles
//! - [`claims`]: JWT claims and the resolved [`Principal`]
//! - [`jwt`]: Token verification (and minting for development and tests)
//! - [`policy`]: The single permission decision shared by every handler
//!
//! Tokens are issued by the campus identity provider, which shares the
//! signing secret with this service.
//!
//! # Example
//!
//! ```ignore
//! use plantdesk_auth::{Action, Resource, authorize, verify_token};
//!
//! let principal = verify_token(token, &jwt_config)?.principal()?;
//! let access = authorize(&principal, Resource::Projects, Action::Read)?;
//! let (items, total) = store.projects.fetch(&query, access.owner()).await;
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;
pub mod role;

// Re-export commonly used types at crate root
pub use claims::{Claims, Principal};
pub use jwt::{create_access_token, verify_token};
pub use policy::{Access, Action, Resource, authorize};
pub use role::Role;
