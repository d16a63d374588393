//! Feature modules, one per resource.
//!
//! Each module has a `service.rs` with the business rules, a
//! `controller.rs` with the axum handlers and a `router.rs` that wires them.

pub mod contractors;
pub mod documents;
pub mod health;
pub mod media;
pub mod projects;
pub mod settings;
