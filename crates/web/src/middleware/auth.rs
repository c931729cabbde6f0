//! Session state extractor.
//!
//! Loads the caller's [`SessionState`] from the session store so handlers can
//! pass it explicitly into gate and registry operations.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use einkauf_core::SessionState;

use crate::error::AppError;
use crate::models::session_keys;

/// The request's session together with its decoded authentication state.
///
/// Changes made through [`SessionContext::state_mut`] are only persisted by
/// [`SessionContext::commit`].
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(ctx: SessionContext) -> impl IntoResponse {
///     match ctx.state().current() {
///         Some(member) => format!("Hello, {}!", member.username),
///         None => "Hello, guest!".to_string(),
///     }
/// }
/// ```
pub struct SessionContext {
    session: Session,
    state: SessionState,
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer missing".to_string()))?;

        let state = session
            .get::<SessionState>(session_keys::SESSION_STATE)
            .await?
            .unwrap_or_default();

        Ok(Self { session, state })
    }
}

impl SessionContext {
    /// The authentication state as loaded (or as modified since).
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Mutable access for the session gate.
    pub const fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    /// Write the current state back, issuing a fresh session ID.
    ///
    /// Called after a successful login so a pre-login session ID never
    /// becomes authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be modified.
    pub async fn commit_with_new_id(&self) -> Result<(), tower_sessions::session::Error> {
        self.session.cycle_id().await?;
        self.session
            .insert(session_keys::SESSION_STATE, &self.state)
            .await
    }

    /// Destroy the session record and its cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot delete the record.
    pub async fn destroy(self) -> Result<(), tower_sessions::session::Error> {
        self.session.flush().await
    }
}
