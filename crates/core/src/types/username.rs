//! Member username type.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The name a member registers and logs in with.
///
/// ## Constraints
///
/// - Surrounding whitespace is stripped
/// - Must not be empty after stripping
///
/// Uniqueness is a property of the member table, not of this type.
///
/// ## Examples
///
/// ```
/// use einkauf_core::Username;
///
/// assert_eq!(Username::parse("  horst ").unwrap().as_str(), "horst");
/// assert!(Username::parse("").is_err());
/// assert!(Username::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Parse a `Username` from form input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyUsername`] if nothing but whitespace
    /// was entered.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the username as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Username` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Username {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// SQLx support (with sqlite feature)
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Username {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Username {
    fn decode(
        value: <sqlx::Sqlite as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        // Rows were written through `parse`
        Ok(Self(s))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Username {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Sqlite as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_names() {
        assert!(Username::parse("root").is_ok());
        assert!(Username::parse("horst").is_ok());
        assert!(Username::parse("Ricardo Band").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Username::parse(""), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert_eq!(
            Username::parse(" \t "),
            Err(ValidationError::EmptyUsername)
        );
    }

    #[test]
    fn test_parse_strips_surrounding_whitespace() {
        let name = Username::parse("  harry\n").unwrap();
        assert_eq!(name.as_str(), "harry");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let name = Username::parse("root").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"root\"");
    }
}
