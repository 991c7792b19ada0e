//! # Parkar
//!
//! Parking lot reservation backend: lots, blocks and slots, time-frame
//! pricing, ticket booking with extension and check-in/out, and a
//! slot-availability search.
//!
//! ## Architecture
//!
//! - **domain**: entities, lifecycle rules and repository traits
//! - **application**: use-case services
//! - **infrastructure**: SeaORM persistence, migrations and crypto
//! - **interfaces**: axum REST API with Swagger documentation
//! - **server**: runtime bootstrap shared by the binaries

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, ConfigError};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::{create_api_router, AppState};
