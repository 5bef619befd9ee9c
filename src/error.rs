//! Custom error types for the expense ledger
//!
//! Every ledger operation returns an explicit error kind so the menu can
//! tell a missing ledger apart from a bad row or a bad selection.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// The backing file does not exist
    #[error("Ledger file not found: {}", path.display())]
    StoreAbsent { path: PathBuf },

    /// The ledger file exists but holds no expenses
    #[error("Ledger has no expenses yet")]
    EmptyStore,

    /// Amount text is not a finite number
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Numeric selection outside 1..=count
    #[error("Invalid selection {position}: expected 1 to {count}")]
    InvalidSelection { position: i64, count: usize },

    /// Selection text is not a whole number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A data row could not be read as an expense
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Create a "store absent" error for the given path
    pub fn store_absent(path: impl Into<PathBuf>) -> Self {
        Self::StoreAbsent { path: path.into() }
    }

    /// Create a malformed row error
    pub fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    /// Check if the ledger file was missing
    pub fn is_store_absent(&self) -> bool {
        matches!(self, Self::StoreAbsent { .. })
    }

    /// Check if the ledger had no data rows
    pub fn is_empty_store(&self) -> bool {
        matches!(self, Self::EmptyStore)
    }

    /// Check if this is an out-of-range selection
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::InvalidSelection { .. })
    }

    /// Check if this is a malformed row error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRow { .. })
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
