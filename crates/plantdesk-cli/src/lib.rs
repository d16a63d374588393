//! # PlantDesk CLI
//!
//! Fixture generation utilities for PlantDesk development and demos.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use plantdesk_cli::seeder::{seed_fixture, SeedConfig};
//!
//! let config = SeedConfig::new(10); // 10 client departments with defaults
//! seed_fixture(Path::new("fixtures/demo.json"), config).await?;
//! ```

pub mod seeder;
