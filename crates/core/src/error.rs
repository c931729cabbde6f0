//! Error kinds of the authentication and registry rules.
//!
//! These are tags, not messages: every variant has a stable snake_case
//! [`code`](DomainError::code) and the web crate maps codes to the literal
//! text shown to members.

use thiserror::Error;

/// A form field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ValidationError {
    /// Registration without a username.
    #[error("username is empty")]
    EmptyUsername,
    /// Registration without a password.
    #[error("password is empty")]
    EmptyPassword,
    /// Password and confirmation differ.
    #[error("password confirmation does not match")]
    PasswordMismatch,
    /// A member with this username already exists.
    #[error("username is already registered")]
    UsernameTaken,
    /// Store name is blank.
    #[error("store name is empty")]
    EmptyStoreName,
    /// The URL list contained no usable entry.
    #[error("store has no ordering URL")]
    NoStoreUrls,
    /// Minimum order is not a non-negative decimal.
    #[error("minimum order is not a non-negative amount")]
    InvalidMinimumOrder,
    /// Queue title is blank.
    #[error("queue title is empty")]
    EmptyQueueTitle,
}

impl ValidationError {
    /// Stable identifier for this error kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::EmptyUsername => "empty_username",
            Self::EmptyPassword => "empty_password",
            Self::PasswordMismatch => "password_mismatch",
            Self::UsernameTaken => "username_taken",
            Self::EmptyStoreName => "empty_store_name",
            Self::NoStoreUrls => "no_store_urls",
            Self::InvalidMinimumOrder => "invalid_minimum_order",
            Self::EmptyQueueTitle => "empty_queue_title",
        }
    }
}

/// Login failed or the session is not allowed to mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AuthError {
    /// No member with this username.
    #[error("unknown user")]
    UnknownUser,
    /// Member exists but the password does not verify.
    #[error("bad password")]
    BadPassword,
    /// Mutation attempted from an anonymous session.
    #[error("not authenticated")]
    NotAuthenticated,
}

impl AuthError {
    /// Stable identifier for this error kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownUser => "unknown_user",
            Self::BadPassword => "bad_password",
            Self::NotAuthenticated => "not_authenticated",
        }
    }
}

/// A reference to another record does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ReferenceError {
    /// The store selected for a queue does not exist.
    #[error("unknown store")]
    UnknownStore,
}

impl ReferenceError {
    /// Stable identifier for this error kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UnknownStore => "unknown_store",
        }
    }
}

/// Any rule violation of the core, recoverable within a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl DomainError {
    /// Stable identifier for this error kind.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Validation(e) => e.code(),
            Self::Auth(e) => e.code(),
            Self::Reference(e) => e.code(),
        }
    }
}
