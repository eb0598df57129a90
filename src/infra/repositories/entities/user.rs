//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use crate::domain::{NewUser, User};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub date_of_birth: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity. Fails closed on an unknown gender.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let gender = model.gender.parse().map_err(|_| {
            AppError::internal(format!("user {} has gender '{}'", model.id, model.gender))
        })?;

        Ok(User {
            id: model.id,
            gender,
            first_name: model.first_name,
            last_name: model.last_name,
            date_of_birth: model.date_of_birth,
            email: model.email,
            phone_number: model.phone_number,
            location: model.location,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl ActiveModel {
    /// Row for a new user; the id is left to the database sequence.
    pub fn for_insert(input: NewUser, now: DateTimeUtc) -> Self {
        Self {
            id: NotSet,
            first_name: Set(input.first_name),
            last_name: Set(input.last_name),
            gender: Set(input.gender.to_string()),
            date_of_birth: Set(input.date_of_birth),
            email: Set(input.email),
            phone_number: Set(input.phone_number),
            location: Set(input.location),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Full-row update keyed by the user's id. `created_at` is never written.
    pub fn for_save(user: User) -> Self {
        Self {
            id: Unchanged(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            gender: Set(user.gender.to_string()),
            date_of_birth: Set(user.date_of_birth),
            email: Set(user.email),
            phone_number: Set(user.phone_number),
            location: Set(user.location),
            created_at: Unchanged(user.created_at),
            updated_at: Set(user.updated_at),
        }
    }
}
