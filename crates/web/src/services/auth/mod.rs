//! Authentication services.
//!
//! The [`CredentialStore`] owns member records and password hashes; the
//! [`SessionGate`] verifies credentials against it and moves a
//! `SessionState` between `Anonymous` and `Authenticated`.

mod credentials;
mod gate;
mod password;

pub use credentials::CredentialStore;
pub use gate::SessionGate;
