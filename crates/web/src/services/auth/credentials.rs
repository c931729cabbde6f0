//! Credential store: member registration and seeding.

use sqlx::SqlitePool;

use einkauf_core::{Username, ValidationError};

use super::password::hash_password;
use crate::db::{MemberRepository, RepositoryError};
use crate::models::Member;
use crate::services::ServiceError;

/// Owns member records and their password hashes.
pub struct CredentialStore<'a> {
    members: MemberRepository<'a>,
}

impl<'a> CredentialStore<'a> {
    /// Create a new credential store.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            members: MemberRepository::new(pool),
        }
    }

    /// Register a new member.
    ///
    /// Checks run in a fixed order and the first failure wins: empty
    /// username, empty password, username taken, password mismatch. The new
    /// member is not logged in.
    ///
    /// # Errors
    ///
    /// Returns the corresponding `ValidationError` as `ServiceError::Domain`.
    /// Returns `ServiceError::Repository` if the database operation fails.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        password_confirmation: &str,
    ) -> Result<Member, ServiceError> {
        let username = Username::parse(username)?;

        if password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }

        if self.members.get_by_username(&username).await?.is_some() {
            return Err(ValidationError::UsernameTaken.into());
        }

        if password != password_confirmation {
            return Err(ValidationError::PasswordMismatch.into());
        }

        let member = self.create(&username, password).await?;
        tracing::info!(member_id = %member.id, username = %member.username, "Member registered");
        Ok(member)
    }

    /// Create `username` with `password` unless the member already exists.
    ///
    /// Returns the member when it was created, `None` when it already existed.
    /// An existing member's password is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyUsername` / `EmptyPassword` for blank
    /// input, `ServiceError::Repository` if the database operation fails.
    pub async fn ensure_member(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Member>, ServiceError> {
        let username = Username::parse(username)?;

        if password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }

        if self.members.get_by_username(&username).await?.is_some() {
            tracing::debug!(username = %username, "Member already present, not seeding");
            return Ok(None);
        }

        let member = self.create(&username, password).await?;
        tracing::info!(member_id = %member.id, username = %member.username, "Member seeded");
        Ok(Some(member))
    }

    async fn create(&self, username: &Username, password: &str) -> Result<Member, ServiceError> {
        let password_hash = hash_password(password)?;

        self.members
            .create(username, &password_hash)
            .await
            .map_err(|e| match e {
                // Lost a race against a concurrent registration
                RepositoryError::Conflict(_) => ValidationError::UsernameTaken.into(),
                other => ServiceError::Repository(other),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use einkauf_core::DomainError;

    use super::*;
    use crate::test_support::migrated_pool;

    fn validation(err: &ServiceError) -> Option<ValidationError> {
        match err.domain()? {
            DomainError::Validation(v) => Some(v),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_register_once() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);

        let member = store.register("horst", "passw0rd", "passw0rd").await.unwrap();
        assert_eq!(member.username.as_str(), "horst");

        let err = store.register("horst", "other", "other").await.unwrap_err();
        assert_eq!(validation(&err), Some(ValidationError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_register_empty_username_wins() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);

        let err = store.register("", "", "x").await.unwrap_err();
        assert_eq!(validation(&err), Some(ValidationError::EmptyUsername));
    }

    #[tokio::test]
    async fn test_register_empty_password() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);

        let err = store.register("harry", "", "").await.unwrap_err();
        assert_eq!(validation(&err), Some(ValidationError::EmptyPassword));
    }

    #[tokio::test]
    async fn test_register_taken_checked_before_mismatch() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);
        store.register("horst", "passw0rd", "passw0rd").await.unwrap();

        let err = store.register("horst", "passw0rd", "p@ssword").await.unwrap_err();
        assert_eq!(validation(&err), Some(ValidationError::UsernameTaken));
    }

    #[tokio::test]
    async fn test_register_mismatch() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);

        let err = store.register("harry", "passw0rd", "p@ssword").await.unwrap_err();
        assert_eq!(validation(&err), Some(ValidationError::PasswordMismatch));

        // Nothing was persisted
        let member = MemberRepository::new(&pool)
            .get_by_username(&Username::parse("harry").unwrap())
            .await
            .unwrap();
        assert!(member.is_none());
    }

    #[tokio::test]
    async fn test_ensure_member_is_noop_for_existing() {
        let pool = migrated_pool().await;
        let store = CredentialStore::new(&pool);

        assert!(store.ensure_member("root", "toor").await.unwrap().is_some());
        assert!(store.ensure_member("root", "changed").await.unwrap().is_none());
    }
}
