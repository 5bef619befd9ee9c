//! Expense Ledger - pocket expense tracker backed by a CSV file
//!
//! This library provides the core functionality for the `expenses`
//! command-line tool: a CSV-backed store of dated, categorized expenses and
//! the interactive menu that drives it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Ledger paths and display settings
//! - `error`: Custom error types
//! - `models`: Expense records and amounts
//! - `storage`: CSV file I/O and the `ExpenseStore`
//! - `display`: Plain-text screen formatting
//! - `cli`: The interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::config::LedgerPaths;
//! use expense_ledger::models::Amount;
//! use expense_ledger::storage::ExpenseStore;
//!
//! let store = ExpenseStore::new(LedgerPaths::with_ledger_file("expenses.csv"));
//! store.ensure_initialized()?;
//! store.append("Food", Amount::new(12.5), "lunch")?;
//! println!("{}", store.total()?);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
