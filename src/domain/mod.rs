//! Domain layer
//!
//! Plain data structures, validation rules and error types. Nothing in here
//! knows about the database or HTTP.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{is_letters_only, CreateUserDto, User};
