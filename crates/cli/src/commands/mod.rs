//! CLI command implementations.

pub mod member;
pub mod migrate;

use sqlx::SqlitePool;
use thiserror::Error;

use einkauf_web::config::{ConfigError, EinkaufConfig};
use einkauf_web::db::{self, MigrationError};
use einkauf_web::services::ServiceError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] MigrationError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Member already exists: {0}")]
    MemberExists(String),
}

/// Load the configuration and connect to its database.
async fn connect() -> Result<SqlitePool, CommandError> {
    let config = EinkaufConfig::from_env()?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&config.database_url).await?)
}
