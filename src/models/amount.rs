//! Amount type for expense values
//!
//! Amounts are plain `f64` values. Sums use ordinary floating-point
//! addition in file order, so `0.1 + 0.2` totals exactly what the
//! hardware says it does.
//!
//! Rendering always uses the shortest text that reads back to the same
//! value, keeping a trailing `.0` on whole numbers (`12.5`, `10.0`).
//! Ledger files written by earlier versions of the tool use the same
//! rendering, so amounts are never padded to two decimal places.
//!
//! Exponent forms differ from those earlier files: magnitudes of `1e16`
//! and above or below `1e-4` render as `1e16` and `1e-7` here, where the
//! old files hold `1e+16` and `1e-07`. Both forms parse back to the same
//! value.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A single expense amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Wrap a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount from user or file text
    ///
    /// Surrounding whitespace is ignored. Anything that does not parse as
    /// a finite number is rejected; negative values and zero are accepted.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountParseError::NotANumber(trimmed.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(trimmed.to_string()));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Debug formatting of f64 is the shortest round-trip text and keeps
        // the ".0" suffix on integral values.
        write!(f, "{:?}", self.0)
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + *x)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    NotANumber(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::NotANumber(s) => write!(f, "'{}' is not a number", s),
            AmountParseError::NotFinite(s) => write!(f, "'{}' is not a finite number", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_shortest_form() {
        assert_eq!(Amount::new(12.5).to_string(), "12.5");
        assert_eq!(Amount::new(20.25).to_string(), "20.25");
        assert_eq!(Amount::new(10.0).to_string(), "10.0");
        assert_eq!(Amount::new(-5.0).to_string(), "-5.0");
        assert_eq!(Amount::zero().to_string(), "0.0");
    }

    #[test]
    fn test_exponent_forms_parse_either_way() {
        assert_eq!(Amount::new(1e16).to_string(), "1e16");
        assert_eq!(Amount::new(1e-7).to_string(), "1e-7");
        assert_eq!(Amount::parse("1e+16").unwrap(), Amount::new(1e16));
        assert_eq!(Amount::parse("1e-07").unwrap(), Amount::new(1e-7));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("12.5").unwrap(), Amount::new(12.5));
        assert_eq!(Amount::parse(" 10 ").unwrap(), Amount::new(10.0));
        assert_eq!(Amount::parse("-5").unwrap(), Amount::new(-5.0));
        assert_eq!(Amount::parse("0").unwrap(), Amount::zero());
        assert_eq!(Amount::parse("1e3").unwrap(), Amount::new(1000.0));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            Amount::parse("ten"),
            Err(AmountParseError::NotANumber(_))
        ));
        assert!(Amount::parse("").is_err());
        assert!(Amount::parse("12,50").is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(matches!(
            Amount::parse("NaN"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_sum_is_plain_float_addition() {
        let amounts = [Amount::new(10.0), Amount::new(20.25), Amount::new(-5.0)];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total, Amount::new(25.25));

        let drift: Amount = [Amount::new(0.1), Amount::new(0.2)].iter().sum();
        assert_eq!(drift.value(), 0.1 + 0.2);
        assert_eq!(drift.to_string(), "0.30000000000000004");
    }
}
