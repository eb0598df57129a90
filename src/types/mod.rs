//! Shared types for list endpoints and responses.

mod pagination;
mod response;

pub use pagination::{Paginated, PaginatedUsers, PaginationMeta, PaginationParams};
pub use response::{Created, NoContent};
