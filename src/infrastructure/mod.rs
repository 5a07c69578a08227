//! Infrastructure layer - external concerns

pub mod database;
pub mod error;

pub use database::{close_database, init_database, run_migrations, DatabaseConfig};
pub use error::InfraError;
