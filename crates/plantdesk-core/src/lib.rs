//! # PlantDesk Core
//!
//! Core types, errors, and the list query contract shared by every
//! resource-listing endpoint of the PlantDesk API.
//!
//! - [`errors`]: Application error taxonomy with HTTP response conversion
//! - [`pagination`]: Page requests and the paginated response envelope
//! - [`query`]: The list query descriptor and its validator
//!
//! # Example
//!
//! ```ignore
//! use std::collections::HashMap;
//! use plantdesk_core::{ListQuery, Paginated};
//!
//! let params: HashMap<String, String> =
//!     [("page".into(), "2".into()), ("limit".into(), "10".into())].into();
//! let query = ListQuery::<()>::from_params(&params)?;
//!
//! let (items, total) = fetch(&query).await;
//! let envelope = Paginated::new(items, total, query.page_request());
//! ```

pub mod errors;
pub mod pagination;
pub mod query;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{PageRequest, Paginated, PaginationMeta, PaginationParams};
pub use query::{EnumField, FilterSet, ListQuery, RawParams, SortOrder};
