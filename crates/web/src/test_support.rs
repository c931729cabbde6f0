//! Shared fixtures for the crate's unit tests.

#![allow(clippy::unwrap_used)]

use sqlx::SqlitePool;

use einkauf_core::SessionState;

use crate::db;
use crate::services::{CredentialStore, SessionGate};

/// A fresh, migrated in-memory database.
pub async fn migrated_pool() -> SqlitePool {
    let pool = db::create_in_memory_pool().await.unwrap();
    db::migrate(&pool).await.unwrap();
    pool
}

/// Seed `root`/`toor` and return a session logged in as that member.
pub async fn authenticated(pool: &SqlitePool) -> SessionState {
    CredentialStore::new(pool)
        .ensure_member("root", "toor")
        .await
        .unwrap();

    let mut session = SessionState::default();
    SessionGate::new(pool)
        .login(&mut session, "root", "toor")
        .await
        .unwrap();
    session
}
