//! User profile domain entity and related types.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::config::{
    DATE_OF_BIRTH_PATTERN, GENDER_FEMALE, GENDER_MALE, GENDER_OTHER, PHONE_NUMBER_PATTERN,
};
use crate::errors::AppError;

static DATE_OF_BIRTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DATE_OF_BIRTH_PATTERN).expect("date of birth pattern is a valid regex")
});

static PHONE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(PHONE_NUMBER_PATTERN).expect("phone number pattern is a valid regex")
});

/// Gender enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => GENDER_MALE,
            Gender::Female => GENDER_FEMALE,
            Gender::Other => GENDER_OTHER,
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            GENDER_MALE => Ok(Gender::Male),
            GENDER_FEMALE => Ok(Gender::Female),
            GENDER_OTHER => Ok(Gender::Other),
            other => Err(AppError::validation(format!(
                "gender must be one of male, female, other (got '{}')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User profile domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    /// ISO `YYYY-MM-DD`, kept as text
    pub date_of_birth: String,
    pub email: String,
    pub phone_number: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Merge the fields present in `patch`; absent fields keep their value.
    pub fn apply_patch(&mut self, patch: UserPatch) {
        let UserPatch {
            first_name,
            last_name,
            gender,
            date_of_birth,
            email,
            phone_number,
            location,
        } = patch;

        if let Some(first_name) = first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = last_name {
            self.last_name = last_name;
        }
        if let Some(gender) = gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone_number) = phone_number {
            self.phone_number = phone_number;
        }
        if let Some(location) = location {
            self.location = location;
        }
    }

    /// Refresh `updated_at`.
    ///
    /// The new value is always strictly later than the previous one, even when
    /// the clock has not advanced past the stored (microsecond) precision.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = now.max(floor);
    }
}

/// Fields required to create a user profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[validate(length(min = 2, max = 50, message = "firstName must be 2 to 50 characters"))]
    #[schema(example = "Ada", min_length = 2, max_length = 50)]
    pub first_name: String,

    #[validate(length(min = 2, max = 50, message = "lastName must be 2 to 50 characters"))]
    #[schema(example = "Lovelace", min_length = 2, max_length = 50)]
    pub last_name: String,

    #[schema(example = "female")]
    pub gender: Gender,

    #[validate(regex(
        path = *DATE_OF_BIRTH_RE,
        message = "dateOfBirth must be in YYYY-MM-DD format"
    ))]
    #[schema(example = "1990-01-01")]
    pub date_of_birth: String,

    #[validate(
        email(message = "email must be a valid email address"),
        length(min = 5, max = 100, message = "email must be 5 to 100 characters")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[validate(regex(
        path = *PHONE_NUMBER_RE,
        message = "phoneNumber must be between 10 and 15 digits"
    ))]
    #[schema(example = "1234567890")]
    pub phone_number: String,

    #[validate(length(min = 2, max = 100, message = "location must be 2 to 100 characters"))]
    #[schema(example = "Store A", min_length = 2, max_length = 100)]
    pub location: String,
}

/// Partial update: `None` means "leave unchanged"
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    #[validate(length(min = 2, max = 50, message = "firstName must be 2 to 50 characters"))]
    #[schema(example = "Ada")]
    pub first_name: Option<String>,

    #[validate(length(min = 2, max = 50, message = "lastName must be 2 to 50 characters"))]
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,

    #[schema(example = "female")]
    pub gender: Option<Gender>,

    #[validate(regex(
        path = *DATE_OF_BIRTH_RE,
        message = "dateOfBirth must be in YYYY-MM-DD format"
    ))]
    #[schema(example = "1990-01-01")]
    pub date_of_birth: Option<String>,

    #[validate(
        email(message = "email must be a valid email address"),
        length(min = 5, max = 100, message = "email must be 5 to 100 characters")
    )]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,

    #[validate(regex(
        path = *PHONE_NUMBER_RE,
        message = "phoneNumber must be between 10 and 15 digits"
    ))]
    #[schema(example = "1234567890")]
    pub phone_number: Option<String>,

    #[validate(length(min = 2, max = 100, message = "location must be 2 to 100 characters"))]
    #[schema(example = "Store B")]
    pub location: Option<String>,
}

/// User profile as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    pub gender: Gender,
    #[schema(example = "1990-01-01")]
    pub date_of_birth: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "1234567890")]
    pub phone_number: String,
    #[schema(example = "Store A")]
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
