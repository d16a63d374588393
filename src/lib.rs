//! # PlantDesk API
//!
//! A REST API built with Rust and Axum for a campus physical-plant office.
//! Staff track construction and renovation projects, contractors, project
//! documents and media; campus departments (clients) follow their own
//! projects through a read-only portal.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── plantdesk-core/     # Errors, list query contract, paginated envelope
//! ├── plantdesk-config/   # Environment-driven configuration
//! ├── plantdesk-auth/     # Roles, JWT claims, access policy
//! ├── plantdesk-models/   # Resource records, DTOs and filters
//! ├── plantdesk-store/    # In-memory collections and JSON fixtures
//! └── plantdesk-cli/      # Fixture seeding and dev tokens
//! src/
//! ├── middleware/         # AuthUser and ListQueryParams extractors
//! └── modules/            # One module per resource
//! ```
//!
//! Each feature module follows the same structure:
//!
//! - `service.rs`: Business logic and access checks
//! - `controller.rs`: HTTP handlers
//! - `router.rs`: Axum router configuration
//!
//! ## Listing
//!
//! Every list endpoint accepts `page`, `limit`, `sort` and `order` plus its
//! own filters, and answers with `{ "data": [...], "meta": {...} }`. See
//! [`plantdesk_core::query`] and [`plantdesk_core::pagination`].
//!
//! ## Roles
//!
//! | Role | Access |
//! |------|--------|
//! | Admin | Everything |
//! | Manager | Everything except writing settings |
//! | Client | Reads its own projects, documents and media |
//!
//! ## Quick Start
//!
//! ```bash
//! JWT_SECRET=change-me cargo run --bin plantdesk-cli -- seed
//! JWT_SECRET=change-me cargo run -- --seed fixtures/demo.json
//! JWT_SECRET=change-me cargo run --bin plantdesk-cli -- token --role manager
//! ```
//!
//! API documentation is served at `/swagger-ui` and `/scalar`.

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use plantdesk_auth;
pub use plantdesk_config;
pub use plantdesk_core;
pub use plantdesk_models;
pub use plantdesk_store;
