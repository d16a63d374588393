//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: Bearer token to [`Principal`](plantdesk_auth::Principal)
//! - [`list_query`]: Query string to a validated [`ListQuery`](plantdesk_core::ListQuery)
//! - [`path`]: Path parameters with JSON rejections
//!
//! Extractors run in handler argument order. Handlers take [`auth::AuthUser`]
//! before [`list_query::ListQueryParams`], so an anonymous request with a bad
//! query string is answered with 401, not 400.

pub mod auth;
pub mod list_query;
pub mod path;
