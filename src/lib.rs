//! User Registry - user profile management API
//!
//! Create, list (paginated), fetch, partially update and delete user
//! profiles against PostgreSQL, with a global uniqueness rule on email.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User profile entity, create and patch inputs
//! - **services**: The user registry and the record mapper
//! - **infra**: Database, migrations and the user repository
//! - **api**: HTTP handlers, extractors and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert demo profiles
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Gender, NewUser, User, UserPatch, UserResponse};
pub use errors::{AppError, AppResult};
