//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::config::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};

/// Pagination query parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Page number, starting at 1
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(example = 1, minimum = 1)]
    pub page: u64,
    /// Items per page
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    #[param(example = 5, minimum = 1, maximum = 100)]
    pub limit: u64,
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_limit() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationParams {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }
    }

    /// Reject a window the registry must never run a query for.
    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.page < 1 {
            return Err(AppError::validation("page must be at least 1"));
        }
        if self.limit < 1 || self.limit > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "limit must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }
        Ok(())
    }

    /// Calculate offset for database query
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
#[aliases(PaginatedUsers = Paginated<UserResponse>)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[schema(example = 1)]
    pub page: u64,
    #[schema(example = 5)]
    pub limit: u64,
    #[schema(example = 8)]
    pub total_items: u64,
    #[schema(example = 2)]
    pub total_pages: u64,
}

impl PaginationMeta {
    /// `total_pages = ceil(total_items / limit)`, zero when there are no items.
    pub fn new(page: u64, limit: u64, total_items: u64) -> Self {
        debug_assert!(limit >= 1, "page size must be at least 1");
        let total_pages = if limit > 0 {
            total_items.div_ceil(limit)
        } else {
            0
        };

        Self {
            page,
            limit,
            total_items,
            total_pages,
        }
    }
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, page: u64, limit: u64, total_items: u64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(page, limit, total_items),
        }
    }
}
