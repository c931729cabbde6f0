//! Ordering URLs of a store.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The ordered, non-empty list of URLs a store takes orders at.
///
/// Forms submit the list as one comma-separated field; [`StoreUrls::parse_csv`]
/// turns it into a sequence at the boundary. The first entry is the store's
/// primary reference. No URL syntax is checked.
///
/// ```
/// use einkauf_core::StoreUrls;
///
/// let urls = StoreUrls::parse_csv("http://www.adafruit.com/,http://adafruit.com/").unwrap();
/// assert_eq!(urls.primary(), "http://www.adafruit.com/");
/// assert_eq!(urls.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct StoreUrls(Vec<String>);

impl StoreUrls {
    /// Split a comma-separated field into URLs.
    ///
    /// Entries are trimmed; empty entries (`"a,,b"`, trailing commas) are
    /// dropped. Order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoStoreUrls`] when no entry remains.
    pub fn parse_csv(input: &str) -> Result<Self, ValidationError> {
        let urls: Vec<String> = input
            .split(',')
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_owned)
            .collect();

        Self::try_from(urls)
    }

    /// The first URL, rendered as the store's link.
    #[must_use]
    pub fn primary(&self) -> &str {
        // Non-empty by construction
        self.0.first().map_or("", String::as_str)
    }

    /// All URLs in input order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over the URLs in input order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of URLs (always at least one).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<Vec<String>> for StoreUrls {
    type Error = ValidationError;

    fn try_from(urls: Vec<String>) -> Result<Self, Self::Error> {
        if urls.is_empty() {
            return Err(ValidationError::NoStoreUrls);
        }
        Ok(Self(urls))
    }
}

impl From<StoreUrls> for Vec<String> {
    fn from(urls: StoreUrls) -> Self {
        urls.0
    }
}
