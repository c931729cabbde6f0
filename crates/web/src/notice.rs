//! One-shot notices carried across redirects.
//!
//! Handlers redirect with `?success=<code>` or `?error=<code>`; the target
//! page parses the code back into a [`Notice`] and renders its message.
//! Unknown codes are ignored.

use axum::response::Redirect;
use serde::Deserialize;

use einkauf_core::{AuthError, DomainError, ReferenceError, ValidationError};

/// Query parameters for error/success display.
#[derive(Debug, Default, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// A message shown once at the top of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Registered,
    LoggedIn,
    LoggedOut,
    StoreAdded,
    QueueAdded,
    Failed(DomainError),
}

const SUCCESSES: [Notice; 5] = [
    Notice::Registered,
    Notice::LoggedIn,
    Notice::LoggedOut,
    Notice::StoreAdded,
    Notice::QueueAdded,
];

const FAILURES: [DomainError; 12] = [
    DomainError::Validation(ValidationError::EmptyUsername),
    DomainError::Validation(ValidationError::EmptyPassword),
    DomainError::Validation(ValidationError::PasswordMismatch),
    DomainError::Validation(ValidationError::UsernameTaken),
    DomainError::Validation(ValidationError::EmptyStoreName),
    DomainError::Validation(ValidationError::NoStoreUrls),
    DomainError::Validation(ValidationError::InvalidMinimumOrder),
    DomainError::Validation(ValidationError::EmptyQueueTitle),
    DomainError::Auth(AuthError::UnknownUser),
    DomainError::Auth(AuthError::BadPassword),
    DomainError::Auth(AuthError::NotAuthenticated),
    DomainError::Reference(ReferenceError::UnknownStore),
];

impl Notice {
    /// Parse a success code.
    #[must_use]
    pub fn success(code: &str) -> Option<Self> {
        SUCCESSES.into_iter().find(|notice| notice.code() == code)
    }

    /// Parse an error code.
    #[must_use]
    pub fn error(code: &str) -> Option<Self> {
        FAILURES
            .into_iter()
            .find(|err| err.code() == code)
            .map(Self::Failed)
    }

    /// Pick the notice out of the query string. An error wins over a success.
    #[must_use]
    pub fn from_query(query: &MessageQuery) -> Option<Self> {
        query
            .error
            .as_deref()
            .and_then(Self::error)
            .or_else(|| query.success.as_deref().and_then(Self::success))
    }

    /// The stable code used in the query string.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::LoggedIn => "logged_in",
            Self::LoggedOut => "logged_out",
            Self::StoreAdded => "store_added",
            Self::QueueAdded => "queue_added",
            Self::Failed(err) => err.code(),
        }
    }

    /// Whether this notice reports a failure.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The text shown to the member.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Registered => "You were successfully registered and can login now",
            Self::LoggedIn => "You were logged in",
            Self::LoggedOut => "You were logged out",
            Self::StoreAdded => "New store was successfully added",
            Self::QueueAdded => "New queue was successfully added",
            Self::Failed(DomainError::Validation(err)) => match err {
                ValidationError::EmptyUsername => "You have to enter a username",
                ValidationError::EmptyPassword => "You have to enter a password",
                ValidationError::PasswordMismatch => "The two passwords do not match",
                ValidationError::UsernameTaken => "The username is already taken",
                ValidationError::EmptyStoreName => "You have to enter a store name",
                ValidationError::NoStoreUrls => "You have to enter at least one store URL",
                ValidationError::InvalidMinimumOrder => {
                    "The minimum order has to be a non-negative amount"
                }
                ValidationError::EmptyQueueTitle => "You have to enter a title",
            },
            Self::Failed(DomainError::Auth(err)) => match err {
                AuthError::UnknownUser => "Invalid username",
                AuthError::BadPassword => "Invalid password",
                AuthError::NotAuthenticated => {
                    "You must be logged in to see something useful here"
                }
            },
            Self::Failed(DomainError::Reference(ReferenceError::UnknownStore)) => {
                "The selected store does not exist"
            }
        }
    }

    /// Redirect to `path` carrying this notice.
    #[must_use]
    pub fn redirect(self, path: &str) -> Redirect {
        let key = if self.is_error() { "error" } else { "success" };
        Redirect::to(&format!("{path}?{key}={}", self.code()))
    }
}

impl From<DomainError> for Notice {
    fn from(err: DomainError) -> Self {
        Self::Failed(err)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::header::LOCATION;
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn test_every_code_parses_back() {
        for notice in SUCCESSES {
            assert_eq!(Notice::success(notice.code()), Some(notice));
            assert!(!notice.is_error());
        }
        for err in FAILURES {
            let notice = Notice::from(err);
            assert_eq!(Notice::error(notice.code()), Some(notice));
            assert!(notice.is_error());
        }
    }

    #[test]
    fn test_codes_are_not_crossed() {
        assert_eq!(Notice::success("unknown_user"), None);
        assert_eq!(Notice::error("logged_in"), None);
        assert_eq!(Notice::error("no_such_code"), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Notice::LoggedIn.message(), "You were logged in");
        assert_eq!(
            Notice::from(DomainError::Auth(AuthError::NotAuthenticated)).message(),
            "You must be logged in to see something useful here"
        );
        assert_eq!(
            Notice::from(DomainError::Validation(ValidationError::PasswordMismatch)).message(),
            "The two passwords do not match"
        );
    }

    #[test]
    fn test_from_query_prefers_error() {
        let query = MessageQuery {
            error: Some("bad_password".to_string()),
            success: Some("logged_in".to_string()),
        };
        assert_eq!(
            Notice::from_query(&query),
            Some(Notice::Failed(DomainError::Auth(AuthError::BadPassword)))
        );

        let query = MessageQuery {
            error: Some("garbage".to_string()),
            success: Some("logged_out".to_string()),
        };
        assert_eq!(Notice::from_query(&query), Some(Notice::LoggedOut));
        assert_eq!(Notice::from_query(&MessageQuery::default()), None);
    }

    #[test]
    fn test_redirect_location() {
        let response = Notice::Registered.redirect("/login").into_response();
        assert_eq!(response.headers()[LOCATION], "/login?success=registered");

        let response = Notice::from(DomainError::Reference(ReferenceError::UnknownStore))
            .redirect("/")
            .into_response();
        assert_eq!(response.headers()[LOCATION], "/?error=unknown_store");
    }
}
