//! User repository: the narrow storage port the registry depends on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations must enforce email uniqueness themselves (a unique index)
/// and report a violation from `insert` or `save` as `AppError::Conflict`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by exact email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user, assigning its id
    async fn insert(&self, input: NewUser, now: DateTime<Utc>) -> AppResult<User>;

    /// Persist every mutable field of an existing user
    async fn save(&self, user: User) -> AppResult<User>;

    /// Remove a user permanently
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Total number of users
    async fn count(&self) -> AppResult<u64>;

    /// One window of users ordered by ascending id.
    ///
    /// Callers keep `offset` below `count()`, so it always fits a Postgres bigint.
    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<Vec<User>>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        UserEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .map(User::try_from)
            .transpose()
    }

    async fn insert(&self, input: NewUser, now: DateTime<Utc>) -> AppResult<User> {
        let email = input.email.clone();
        let model = ActiveModel::for_insert(input, now)
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, &email))?;

        User::try_from(model)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let id = user.id;
        let email = user.email.clone();
        let model = ActiveModel::for_save(user)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => AppError::not_found(format!("User with ID {}", id)),
                other => AppError::from_write(other, &email),
            })?;

        User::try_from(model)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(format!("User with ID {}", id)));
        }

        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(UserEntity::find().count(&self.db).await?)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await?;

        models.into_iter().map(User::try_from).collect()
    }
}
