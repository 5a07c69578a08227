//! Application layer - use cases orchestrating domain and persistence

pub mod users;

pub use users::UserService;
