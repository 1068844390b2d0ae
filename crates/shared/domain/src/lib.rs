//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user entity defined here is what the HTTP layer serializes as-is.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{NewUser, User};
