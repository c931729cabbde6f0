//! Queue deadline.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The date a queue closes, kept exactly as entered (usually `YYYY-MM-DD`).
///
/// Not checked for calendar correctness; listings echo the literal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deadline(String);

impl Deadline {
    /// Wrap a deadline string verbatim.
    #[must_use]
    pub fn new(deadline: impl Into<String>) -> Self {
        Self(deadline.into())
    }

    /// The deadline as entered.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadline_is_verbatim() {
        assert_eq!(Deadline::new("2012-01-30").to_string(), "2012-01-30");
        assert_eq!(Deadline::new("2012-02-31").as_str(), "2012-02-31");
    }
}
