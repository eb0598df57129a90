//! Migrate command - Applies, reverts or inspects the users schema.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Applied and pending migration names, in declaration order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub applied: Vec<String>,
    pub pending: Vec<String>,
}

impl MigrationReport {
    pub fn from_status(status: Vec<(String, bool)>) -> Self {
        let (applied, pending): (Vec<_>, Vec<_>) =
            status.into_iter().partition(|(_, applied)| *applied);

        Self {
            applied: applied.into_iter().map(|(name, _)| name).collect(),
            pending: pending.into_iter().map(|(name, _)| name).collect(),
        }
    }

    pub fn is_up_to_date(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // `connect` would apply pending migrations before `status` or `down` could run
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            tracing::info!("Users schema is up to date");
        }
        MigrateAction::Down => {
            tracing::warn!("Reverting the latest migration");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed");
        }
        MigrateAction::Status => {
            let report = MigrationReport::from_status(db.migration_status().await?);
            for name in &report.applied {
                println!("{}: applied", name);
            }
            for name in &report.pending {
                println!("{}: pending", name);
            }
            tracing::info!(
                applied = report.applied.len(),
                pending = report.pending.len(),
                up_to_date = report.is_up_to_date(),
                "Migration status"
            );
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables; every stored user profile will be lost");
            db.fresh_migrations().await?;
            tracing::info!("Users schema recreated");
        }
    }

    Ok(())
}
