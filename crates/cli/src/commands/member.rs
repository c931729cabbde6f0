//! Member management commands.

use secrecy::{ExposeSecret, SecretString};

use einkauf_web::services::CredentialStore;

use super::{CommandError, connect};

/// Create a member with the given credentials.
///
/// Fails if the username is already taken; use the server's
/// `EINKAUF_ADMIN_*` variables for idempotent seeding.
pub async fn create(username: &str, password: SecretString) -> Result<(), CommandError> {
    let pool = connect().await?;

    let created = CredentialStore::new(&pool)
        .ensure_member(username, password.expose_secret())
        .await?;

    match created {
        Some(member) => {
            tracing::info!(
                member_id = %member.id,
                username = %member.username,
                "Member created"
            );
            Ok(())
        }
        None => Err(CommandError::MemberExists(username.to_owned())),
    }
}
