//! Storage layer for the expense ledger
//!
//! A single CSV file holds every expense. Reads parse the whole file,
//! appends add one row, and deletes rewrite the file atomically.

pub mod file_io;
pub mod ledger;

pub use file_io::{append_row, create_with_header, read_rows, write_rows_atomic, CsvRow};
pub use ledger::{parse_amount, parse_selection, CategoryReport, ExpenseStore};
