//! Member domain type.

use chrono::{DateTime, Utc};

use einkauf_core::{CurrentMember, MemberId, Username};

/// A registered member.
///
/// The password hash never leaves the repository layer on this type.
#[derive(Debug, Clone)]
pub struct Member {
    /// Unique member ID.
    pub id: MemberId,
    /// Login name.
    pub username: Username,
    /// When the member registered.
    pub created_at: DateTime<Utc>,
}

impl Member {
    /// The identity stored in the session after login.
    #[must_use]
    pub fn to_current(&self) -> CurrentMember {
        CurrentMember {
            id: self.id,
            username: self.username.clone(),
        }
    }
}
