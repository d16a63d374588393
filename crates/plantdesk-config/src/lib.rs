//! # PlantDesk Config
//!
//! Configuration types for the PlantDesk API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`server`]: Listen address
//! - [`jwt`]: Bearer token verification
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`observability`]: Log level, log directory and metrics toggle
//!
//! # Example
//!
//! ```ignore
//! use plantdesk_config::{CorsConfig, JwtConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod observability;
pub mod server;

mod env;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use observability::ObservabilityConfig;
pub use server::ServerConfig;
