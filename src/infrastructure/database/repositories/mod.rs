//! Data access layer implementations

pub mod user_dal;

pub use user_dal::UserDal;
