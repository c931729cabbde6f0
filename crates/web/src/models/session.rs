//! Session storage keys.

/// Session keys for authentication data.
pub mod keys {
    /// Key for the serialized `SessionState`.
    pub const SESSION_STATE: &str = "session_state";
}
