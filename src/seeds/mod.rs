//! # Seeds
//!
//! Bootstrap data for local development profiles.

pub mod user;

pub use user::seed_users;
