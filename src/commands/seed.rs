//! Seed command - Inserts demo user profiles.
//!
//! Goes through the registry, so a profile whose email is already present is
//! reported and skipped instead of duplicated.

use crate::config::Config;
use crate::domain::{Gender, NewUser};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::UserService;
use crate::AppState;

/// One demo profile
struct DemoUser {
    first_name: &'static str,
    last_name: &'static str,
    gender: Gender,
    date_of_birth: &'static str,
    email: &'static str,
    phone_number: &'static str,
    location: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        first_name: "amara",
        last_name: "okafor",
        gender: Gender::Female,
        date_of_birth: "1990-01-01",
        email: "amara.okafor@test.com",
        phone_number: "13812345678",
        location: "store a",
    },
    DemoUser {
        first_name: "bruno",
        last_name: "silva",
        gender: Gender::Male,
        date_of_birth: "1991-01-01",
        email: "bruno.silva@test.com",
        phone_number: "13698765432",
        location: "store b",
    },
    DemoUser {
        first_name: "chen",
        last_name: "wei",
        gender: Gender::Male,
        date_of_birth: "1992-01-01",
        email: "chen.wei@test.com",
        phone_number: "15012348765",
        location: "store a",
    },
    DemoUser {
        first_name: "dana",
        last_name: "novak",
        gender: Gender::Female,
        date_of_birth: "1993-01-01",
        email: "dana.novak@test.com",
        phone_number: "13511112222",
        location: "store c",
    },
    DemoUser {
        first_name: "emil",
        last_name: "larsen",
        gender: Gender::Male,
        date_of_birth: "1994-01-01",
        email: "emil.larsen@test.com",
        phone_number: "13922223333",
        location: "store b",
    },
    DemoUser {
        first_name: "farah",
        last_name: "haddad",
        gender: Gender::Other,
        date_of_birth: "1995-01-01",
        email: "farah.haddad@test.com",
        phone_number: "15888889999",
        location: "store a",
    },
    DemoUser {
        first_name: "gita",
        last_name: "rao",
        gender: Gender::Female,
        date_of_birth: "1996-01-01",
        email: "gita.rao@test.com",
        phone_number: "13666667777",
        location: "store c",
    },
    DemoUser {
        first_name: "hugo",
        last_name: "moreau",
        gender: Gender::Male,
        date_of_birth: "1997-01-01",
        email: "hugo.moreau@test.com",
        phone_number: "15199998888",
        location: "store b",
    },
];

/// Outcome of a seeding run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub skipped: usize,
}

/// The demo profiles, in insertion order
pub fn demo_users() -> Vec<NewUser> {
    DEMO_USERS
        .iter()
        .map(|demo| NewUser {
            first_name: demo.first_name.to_string(),
            last_name: demo.last_name.to_string(),
            gender: demo.gender,
            date_of_birth: demo.date_of_birth.to_string(),
            email: demo.email.to_string(),
            phone_number: demo.phone_number.to_string(),
            location: demo.location.to_string(),
        })
        .collect()
}

/// Create each profile in `users`, skipping those whose email already exists.
pub async fn seed_users(service: &dyn UserService, users: Vec<NewUser>) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for user in users {
        let email = user.email.clone();
        match service.create_user(user).await {
            Ok(created) => {
                tracing::info!(user_id = created.id, email = %email, "Created user");
                report.created += 1;
            }
            Err(AppError::Conflict(_)) => {
                tracing::warn!(email = %email, "User already exists");
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(report)
}

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!("Seeding database...");

    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;
    let state = AppState::from_database(&db);

    let report = seed_users(state.user_service.as_ref(), demo_users()).await?;
    tracing::info!(
        created = report.created,
        skipped = report.skipped,
        "Seeding completed"
    );

    Ok(())
}
