//! Configuration module for the expense ledger
//!
//! - Ledger path resolution
//! - Display preferences

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
