//! Users module — create and read users

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
