//! Member repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use einkauf_core::{MemberId, Username};

use super::{RepositoryError, conflict_on_unique};
use crate::models::Member;

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: MemberId,
    username: Username,
    created_at: DateTime<Utc>,
}

#[derive(sqlx::FromRow)]
struct MemberWithHashRow {
    id: MemberId,
    username: Username,
    created_at: DateTime<Utc>,
    password_hash: String,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}

/// Repository for member database operations.
pub struct MemberRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MemberRepository<'a> {
    /// Create a new member repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a member by username.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<Member>, RepositoryError> {
        let row = sqlx::query_as::<_, MemberRow>(
            r"
            SELECT id, username, created_at
            FROM member
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Member::from))
    }

    /// Get a member together with their password hash.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &Username,
    ) -> Result<Option<(Member, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, MemberWithHashRow>(
            r"
            SELECT id, username, created_at, password_hash
            FROM member
            WHERE username = ?1
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| {
            let member = Member {
                id: r.id,
                username: r.username,
                created_at: r.created_at,
            };
            (member, r.password_hash)
        }))
    }

    /// Create a member.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &Username,
        password_hash: &str,
    ) -> Result<Member, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            r"
            INSERT INTO member (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            ",
        )
        .bind(username)
        .bind(password_hash)
        .bind(created_at)
        .execute(self.pool)
        .await
        .map_err(|e| conflict_on_unique(e, "username"))?;

        Ok(Member {
            id: MemberId::new(result.last_insert_rowid()),
            username: username.clone(),
            created_at,
        })
    }
}
