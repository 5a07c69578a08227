//! User aggregate
//!
//! Contains the User entity, the create DTO and the name validation rules.

pub mod model;
pub mod validation;

mod dto_create;

pub use dto_create::CreateUserDto;
pub use model::User;
pub use validation::{is_letters_only, validate_name, validate_surname};
