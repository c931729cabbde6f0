//! Service error type.

use thiserror::Error;

use einkauf_core::{AuthError, DomainError, ReferenceError, ValidationError};

use crate::db::RepositoryError;

/// Errors returned by the services.
///
/// `Domain` errors are expected outcomes of user input and are shown to the
/// member; the other variants are infrastructure failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A validation, authentication, or reference rule was violated.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

impl ServiceError {
    /// The domain error, if this is one.
    #[must_use]
    pub const fn domain(&self) -> Option<DomainError> {
        match self {
            Self::Domain(e) => Some(*e),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        Self::Domain(e.into())
    }
}

impl From<AuthError> for ServiceError {
    fn from(e: AuthError) -> Self {
        Self::Domain(e.into())
    }
}

impl From<ReferenceError> for ServiceError {
    fn from(e: ReferenceError) -> Self {
        Self::Domain(e.into())
    }
}
