//! Core data models for the expense ledger
//!
//! Expense records and the amount type they carry.

pub mod amount;
pub mod expense;

pub use amount::{Amount, AmountParseError};
pub use expense::{ExpenseRecord, RowError, DATE_FORMAT, HEADER};
