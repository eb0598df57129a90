//! Domain layer - Core business entities and logic
//!
//! DDD: Domain layer has NO infrastructure dependencies (except error types).

pub mod user;

pub use user::{Gender, NewUser, User, UserPatch, UserResponse};
