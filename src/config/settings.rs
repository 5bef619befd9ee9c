//! User settings for the expense ledger
//!
//! Presentation preferences handed to the menu at construction.

/// Label printed in front of every amount unless overridden
pub const DEFAULT_CURRENCY: &str = "Rs.";

/// User settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Label printed in front of every amount
    pub currency_symbol: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_currency(DEFAULT_CURRENCY)
    }
}

impl Settings {
    /// Settings with a custom currency label
    pub fn with_currency(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}
