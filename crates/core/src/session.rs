//! Session authentication state.
//!
//! A session is either `Anonymous` or `Authenticated` as exactly one member.
//! The state is a plain value: the web crate loads it from the session store,
//! hands it to gate and registry operations, and writes it back.
//!
//! ```text
//! Anonymous ──login──▶ Authenticated(member)
//! Authenticated ──login──▶ Authenticated(other member)
//! Authenticated ──logout──▶ Anonymous
//! Anonymous ──logout──▶ Anonymous
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::types::{MemberId, Username};

/// The member a session is authenticated as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentMember {
    /// Member's database ID.
    pub id: MemberId,
    /// Member's username.
    pub username: Username,
}

/// Authentication state of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "member", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Anonymous,
    Authenticated(CurrentMember),
}

impl SessionState {
    /// Bind the session to `member`, replacing any previous identity.
    pub fn bind(&mut self, member: CurrentMember) {
        *self = Self::Authenticated(member);
    }

    /// Drop the authentication. Calling this on an anonymous session is a no-op.
    pub fn clear(&mut self) {
        *self = Self::Anonymous;
    }

    /// Gate for mutating operations.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotAuthenticated`] for an anonymous session.
    pub const fn require_auth(&self) -> Result<&CurrentMember, AuthError> {
        match self {
            Self::Authenticated(member) => Ok(member),
            Self::Anonymous => Err(AuthError::NotAuthenticated),
        }
    }

    /// The authenticated member, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&CurrentMember> {
        match self {
            Self::Authenticated(member) => Some(member),
            Self::Anonymous => None,
        }
    }

    /// Whether the session is authenticated.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn member(id: i64, name: &str) -> CurrentMember {
        CurrentMember {
            id: MemberId::new(id),
            username: Username::parse(name).unwrap(),
        }
    }

    #[test]
    fn test_initial_state_is_anonymous() {
        let state = SessionState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.require_auth(), Err(AuthError::NotAuthenticated));
    }

    #[test]
    fn test_bind_authenticates() {
        let mut state = SessionState::default();
        state.bind(member(1, "root"));

        let current = state.require_auth().unwrap();
        assert_eq!(current.username.as_str(), "root");
    }

    #[test]
    fn test_bind_rebinds_identity() {
        let mut state = SessionState::default();
        state.bind(member(1, "root"));
        state.bind(member(2, "horst"));

        assert_eq!(state.current().unwrap().id, MemberId::new(2));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut state = SessionState::default();
        state.bind(member(1, "root"));
        state.clear();
        assert_eq!(state, SessionState::Anonymous);

        state.clear();
        assert_eq!(state, SessionState::Anonymous);
    }

    #[test]
    fn test_survives_session_serialization() {
        let mut state = SessionState::default();
        state.bind(member(3, "harry"));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["state"], "authenticated");
        assert_eq!(json["member"]["username"], "harry");

        let back: SessionState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
