//! Session gate: login and logout.

use sqlx::SqlitePool;

use einkauf_core::{AuthError, CurrentMember, SessionState, Username};

use super::password::verify_password;
use crate::db::MemberRepository;
use crate::services::ServiceError;

/// Moves a session between `Anonymous` and `Authenticated`.
pub struct SessionGate<'a> {
    members: MemberRepository<'a>,
}

impl<'a> SessionGate<'a> {
    /// Create a new session gate.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            members: MemberRepository::new(pool),
        }
    }

    /// Verify credentials and bind `session` to the member.
    ///
    /// Logging in on an authenticated session re-binds it. On failure the
    /// session is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UnknownUser` if no member has this username.
    /// Returns `AuthError::BadPassword` if the password does not verify.
    /// Returns `ServiceError::Repository` if the database operation fails.
    pub async fn login(
        &self,
        session: &mut SessionState,
        username: &str,
        password: &str,
    ) -> Result<CurrentMember, ServiceError> {
        // A blank name can never match a member
        let username = Username::parse(username).map_err(|_| AuthError::UnknownUser)?;

        let Some((member, password_hash)) = self.members.get_password_hash(&username).await?
        else {
            tracing::info!(username = %username, "Login with unknown username");
            return Err(AuthError::UnknownUser.into());
        };

        if !verify_password(password, &password_hash)? {
            tracing::info!(member_id = %member.id, "Login with wrong password");
            return Err(AuthError::BadPassword.into());
        }

        let current = member.to_current();
        session.bind(current.clone());
        tracing::info!(member_id = %member.id, username = %member.username, "Member logged in");
        Ok(current)
    }

    /// Clear the session's authentication. Never fails.
    pub fn logout(session: &mut SessionState) {
        if let Some(member) = session.current() {
            tracing::info!(member_id = %member.id, "Member logged out");
        }
        session.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use einkauf_core::DomainError;

    use super::*;
    use crate::services::CredentialStore;
    use crate::test_support::migrated_pool;

    fn auth(err: &ServiceError) -> Option<AuthError> {
        match err.domain()? {
            DomainError::Auth(a) => Some(a),
            _ => None,
        }
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let pool = migrated_pool().await;
        CredentialStore::new(&pool)
            .ensure_member("root", "toor")
            .await
            .unwrap();
        let gate = SessionGate::new(&pool);
        let mut session = SessionState::default();

        let current = gate.login(&mut session, "root", "toor").await.unwrap();
        assert_eq!(current.username.as_str(), "root");
        assert_eq!(session.current(), Some(&current));

        SessionGate::logout(&mut session);
        assert_eq!(session, SessionState::Anonymous);
    }

    #[tokio::test]
    async fn test_failed_login_keeps_session() {
        let pool = migrated_pool().await;
        CredentialStore::new(&pool)
            .ensure_member("root", "toor")
            .await
            .unwrap();
        let gate = SessionGate::new(&pool);
        let mut session = SessionState::default();

        let err = gate.login(&mut session, "wronguser", "toor").await.unwrap_err();
        assert_eq!(auth(&err), Some(AuthError::UnknownUser));
        assert_eq!(session, SessionState::Anonymous);

        gate.login(&mut session, "root", "toor").await.unwrap();
        let before = session.clone();

        let err = gate.login(&mut session, "root", "wrongpass").await.unwrap_err();
        assert_eq!(auth(&err), Some(AuthError::BadPassword));
        assert_eq!(session, before);
    }

    #[tokio::test]
    async fn test_login_rebinds_identity() {
        let pool = migrated_pool().await;
        let credentials = CredentialStore::new(&pool);
        credentials.ensure_member("root", "toor").await.unwrap();
        credentials
            .register("horst", "passw0rd", "passw0rd")
            .await
            .unwrap();
        let gate = SessionGate::new(&pool);
        let mut session = SessionState::default();

        gate.login(&mut session, "root", "toor").await.unwrap();
        gate.login(&mut session, "horst", "passw0rd").await.unwrap();

        assert_eq!(session.current().unwrap().username.as_str(), "horst");
    }

    #[test]
    fn test_logout_when_anonymous() {
        let mut session = SessionState::default();
        SessionGate::logout(&mut session);
        assert_eq!(session, SessionState::Anonymous);
    }
}
