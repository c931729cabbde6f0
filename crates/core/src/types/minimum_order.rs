//! Minimum order amount of a store.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The order total a store requires before a collective order is placed.
///
/// Stored as an exact decimal; no currency is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MinimumOrder(Decimal);

impl MinimumOrder {
    /// Create a minimum order from an already validated amount.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMinimumOrder`] for negative amounts.
    pub fn new(amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::InvalidMinimumOrder);
        }
        Ok(Self(amount.normalize()))
    }

    /// Parse form input such as `"250"` or `"19.99"`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidMinimumOrder`] if the input is not a
    /// decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| ValidationError::InvalidMinimumOrder)?;
        Self::new(amount)
    }

    /// The amount as a decimal.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for MinimumOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinimumOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_amount() {
        let min = MinimumOrder::parse("250").unwrap();
        assert_eq!(min.amount(), Decimal::from(250));
        assert_eq!(min.to_string(), "250");
    }

    #[test]
    fn test_parse_fractional_amount() {
        let min = MinimumOrder::parse(" 19.90 ").unwrap();
        assert_eq!(min.to_string(), "19.9");
    }

    #[test]
    fn test_parse_zero() {
        assert!(MinimumOrder::parse("0").is_ok());
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(
            MinimumOrder::parse("-5"),
            Err(ValidationError::InvalidMinimumOrder)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            MinimumOrder::parse(""),
            Err(ValidationError::InvalidMinimumOrder)
        );
        assert_eq!(
            MinimumOrder::parse("250 EUR"),
            Err(ValidationError::InvalidMinimumOrder)
        );
    }
}
