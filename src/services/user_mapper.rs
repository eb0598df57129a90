//! Translation from stored user records to the shape returned to callers.

use crate::domain::{User, UserResponse};
use crate::types::Paginated;

/// Stateless mapper between `User` and `UserResponse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserMapper;

impl UserMapper {
    /// Project a stored record into its external representation.
    pub fn to_external(user: User) -> UserResponse {
        UserResponse {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            gender: user.gender,
            date_of_birth: user.date_of_birth,
            email: user.email,
            phone_number: user.phone_number,
            location: user.location,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }

    /// Map every record (order preserved) and attach pagination metadata.
    pub fn to_page(
        users: Vec<User>,
        page: u64,
        limit: u64,
        total_items: u64,
    ) -> Paginated<UserResponse> {
        let data = users.into_iter().map(Self::to_external).collect();
        Paginated::new(data, page, limit, total_items)
    }
}
