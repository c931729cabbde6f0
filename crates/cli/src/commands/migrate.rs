//! Database migration command.
//!
//! Applies `crates/web/migrations/` and creates the session table. Safe to run
//! repeatedly.

use einkauf_web::db;

use super::{CommandError, connect};

/// Run all migrations against the configured database.
pub async fn run() -> Result<(), CommandError> {
    let pool = connect().await?;

    db::migrate(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
