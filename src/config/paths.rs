//! Path management for the expense ledger
//!
//! The ledger lives in a single CSV file. By default that is
//! `expenses.csv`, resolved against the process's current working
//! directory; callers (and tests) inject a different location with
//! [`LedgerPaths::with_ledger_file`].

use std::path::{Path, PathBuf};

/// Default ledger file name, relative to the working directory
pub const DEFAULT_LEDGER_FILE: &str = "expenses.csv";

/// Manages the file locations used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// The CSV ledger file
    ledger_file: PathBuf,
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerPaths {
    /// Paths for the default `expenses.csv` in the working directory
    pub fn new() -> Self {
        Self::with_ledger_file(DEFAULT_LEDGER_FILE)
    }

    /// Create LedgerPaths pointing at a custom ledger file (useful for testing)
    pub fn with_ledger_file(ledger_file: impl Into<PathBuf>) -> Self {
        Self {
            ledger_file: ledger_file.into(),
        }
    }

    /// Get the path to the ledger file
    pub fn ledger_file(&self) -> &Path {
        &self.ledger_file
    }

    /// Scratch file used while rewriting the ledger
    ///
    /// Lives next to the ledger so the final rename stays on one filesystem.
    pub fn temp_file(&self) -> PathBuf {
        let mut name = self
            .ledger_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_LEDGER_FILE.into());
        name.push(".tmp");
        self.ledger_file.with_file_name(name)
    }

    /// Check if the ledger file has been created
    pub fn is_initialized(&self) -> bool {
        self.ledger_file.exists()
    }
}
