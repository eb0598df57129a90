//! User service - the registry of user profiles.
//!
//! Owns the email uniqueness rule and the partial-update merge. The unique
//! index behind `UserRepository` is the final authority on uniqueness; the
//! lookups here only give the common case a precise error before any write.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::UserMapper;
use crate::domain::{NewUser, User, UserPatch, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::types::{Paginated, PaginationParams};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user; fails with `Conflict` if the email is taken
    async fn create_user(&self, input: NewUser) -> AppResult<UserResponse>;

    /// One page of users in ascending id order
    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<UserResponse>>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<UserResponse>;

    /// Overwrite only the fields present in `patch`
    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<UserResponse>;

    /// Permanently delete a user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// `Conflict` if another user (any id but `owner`) already holds `email`.
    async fn ensure_email_available(&self, email: &str, owner: Option<i32>) -> AppResult<()> {
        match self.repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => {
                Err(AppError::conflict(format!("User with email {}", email)))
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, input: NewUser) -> AppResult<UserResponse> {
        info!(email = %input.email, "Creating user");

        let email = input.email.clone();
        let created: AppResult<User> = async {
            self.ensure_email_available(&input.email, None).await?;
            self.repo.insert(input, Utc::now()).await
        }
        .await;

        match created {
            Ok(user) => {
                info!(user_id = user.id, "User created");
                Ok(UserMapper::to_external(user))
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Failed to create user");
                Err(e)
            }
        }
    }

    async fn list_users(&self, params: PaginationParams) -> AppResult<Paginated<UserResponse>> {
        info!(page = params.page, limit = params.limit, "Listing users");
        params.ensure_valid()?;

        let total = self.repo.count().await?;
        let offset = params.offset();

        // Past the last row there is nothing to fetch; the offset may not even
        // be representable by the store.
        let users = if offset >= total {
            Vec::new()
        } else {
            self.repo.find_page(offset, params.limit).await?
        };

        Ok(UserMapper::to_page(users, params.page, params.limit, total))
    }

    async fn get_user(&self, id: i32) -> AppResult<UserResponse> {
        info!(user_id = id, "Fetching user");

        match self.repo.find_by_id(id).await? {
            Some(user) => Ok(UserMapper::to_external(user)),
            None => {
                warn!(user_id = id, "User not found");
                Err(AppError::not_found(format!("User with ID {}", id)))
            }
        }
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<UserResponse> {
        info!(user_id = id, "Updating user");

        let updated: AppResult<User> = async {
            let mut user = self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User with ID {}", id)))?;

            if let Some(email) = patch.email.as_deref() {
                if email != user.email {
                    self.ensure_email_available(email, Some(id)).await?;
                }
            }

            user.apply_patch(patch);
            user.touch(Utc::now());
            self.repo.save(user).await
        }
        .await;

        match updated {
            Ok(user) => {
                info!(user_id = id, "User updated");
                Ok(UserMapper::to_external(user))
            }
            Err(e) => {
                warn!(user_id = id, error = %e, "Update failed");
                Err(e)
            }
        }
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        info!(user_id = id, "Deleting user");

        if self.repo.find_by_id(id).await?.is_none() {
            warn!(user_id = id, "Delete failed: user not found");
            return Err(AppError::not_found(format!("User with ID {}", id)));
        }

        self.repo.delete(id).await?;
        info!(user_id = id, "User deleted");
        Ok(())
    }
}
