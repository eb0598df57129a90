//! In-memory `UserRepository` shared by the integration tests.
//!
//! Mirrors the database: ids come from an ever-increasing sequence and
//! email uniqueness is enforced on insert and save, like the unique index.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use user_registry::domain::{Gender, NewUser, User};
use user_registry::errors::{AppError, AppResult};
use user_registry::infra::UserRepository;
use user_registry::services::UserManager;

#[derive(Default)]
struct Rows {
    next_id: i32,
    by_id: BTreeMap<i32, User>,
}

#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Rows>,
    /// Makes `find_by_email` always miss, as if a concurrent writer slipped
    /// in between the registry's pre-check and its write.
    blind_email_lookup: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blind_email_lookup() -> Self {
        Self {
            blind_email_lookup: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().by_id.len()
    }

    pub fn get(&self, id: i32) -> Option<User> {
        self.rows.lock().unwrap().by_id.get(&id).cloned()
    }

    fn email_owner(rows: &Rows, email: &str) -> Option<i32> {
        rows.by_id.values().find(|u| u.email == email).map(|u| u.id)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        if self.blind_email_lookup {
            return Ok(None);
        }
        let rows = self.rows.lock().unwrap();
        Ok(rows.by_id.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, input: NewUser, now: DateTime<Utc>) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if Self::email_owner(&rows, &input.email).is_some() {
            return Err(AppError::conflict(format!("User with email {}", input.email)));
        }

        rows.next_id += 1;
        let user = User {
            id: rows.next_id,
            first_name: input.first_name,
            last_name: input.last_name,
            gender: input.gender,
            date_of_birth: input.date_of_birth,
            email: input.email,
            phone_number: input.phone_number,
            location: input.location,
            created_at: now,
            updated_at: now,
        };
        rows.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.by_id.contains_key(&user.id) {
            return Err(AppError::not_found(format!("User with ID {}", user.id)));
        }
        if matches!(Self::email_owner(&rows, &user.email), Some(owner) if owner != user.id) {
            return Err(AppError::conflict(format!("User with email {}", user.email)));
        }

        rows.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut rows = self.rows.lock().unwrap();
        rows.by_id
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found(format!("User with ID {}", id)))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.lock().unwrap().by_id.len() as u64)
    }

    async fn find_page(&self, offset: u64, limit: u64) -> AppResult<Vec<User>> {
        // Same bound the bigint OFFSET parameter has in Postgres
        let offset = i64::try_from(offset)
            .map_err(|_| AppError::internal(format!("offset {} out of range", offset)))?;

        let rows = self.rows.lock().unwrap();
        Ok(rows
            .by_id
            .values()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Registry over a fresh in-memory store; the store is returned for inspection.
pub fn registry() -> (UserManager, Arc<InMemoryUsers>) {
    registry_over(InMemoryUsers::new())
}

pub fn registry_over(store: InMemoryUsers) -> (UserManager, Arc<InMemoryUsers>) {
    let store = Arc::new(store);
    (UserManager::new(store.clone()), store)
}

pub fn new_user(n: usize) -> NewUser {
    NewUser {
        first_name: format!("First{}", n),
        last_name: format!("Last{}", n),
        gender: match n % 3 {
            0 => Gender::Male,
            1 => Gender::Female,
            _ => Gender::Other,
        },
        date_of_birth: format!("19{:02}-01-01", 50 + n % 50),
        email: format!("user{}@example.com", n),
        phone_number: format!("{:010}", 1_000_000_000u64 + n as u64),
        location: format!("Store {}", n),
    }
}
