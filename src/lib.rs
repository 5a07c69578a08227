//! # User Service
//!
//! Minimal user-management HTTP service backed by a relational database.
//!
//! ## Architecture
//!
//! - **domain**: User model, name validation rules and error types
//! - **application**: Use cases; owns the per-request session lifecycle
//! - **infrastructure**: Connection pool, schema migrations, entities and the user DAL
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Graceful shutdown plumbing

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{close_database, init_database, run_migrations, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
