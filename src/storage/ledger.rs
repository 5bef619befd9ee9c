//! CSV-backed expense store
//!
//! The ledger file is the only copy of the data. Every operation re-reads
//! it from disk, and mutations either append one row or rewrite the whole
//! file, so back-to-back calls always see each other's effects.

use std::num::IntErrorKind;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, ExpenseRecord, HEADER};

use super::file_io::{append_row, create_with_header, read_rows, write_rows_atomic, CsvRow};

/// Expenses matching a category query
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryReport {
    /// Matching expenses in file order
    pub records: Vec<ExpenseRecord>,
    /// Sum of the matching amounts
    pub subtotal: Amount,
    /// Whether anything matched
    pub found: bool,
}

/// File-backed ordered collection of expenses
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    paths: LedgerPaths,
}

impl ExpenseStore {
    /// Create a store over the configured ledger file
    ///
    /// Nothing is read or created until an operation is called.
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Create the ledger file with its header if it does not exist
    ///
    /// An existing file is never truncated or rewritten. Returns `true` if
    /// the file was created.
    pub fn ensure_initialized(&self) -> LedgerResult<bool> {
        let created = create_with_header(self.paths.ledger_file(), HEADER)?;
        if created {
            info!(path = %self.paths.ledger_file().display(), "created ledger file");
        }
        Ok(created)
    }

    /// Append an expense dated today
    pub fn append(&self, category: &str, amount: Amount, note: &str) -> LedgerResult<ExpenseRecord> {
        self.append_at(Local::now().date_naive(), category, amount, note)
    }

    /// Append an expense with an explicit date
    ///
    /// Creates the ledger first if it is missing. Existing rows are never
    /// touched; duplicates are allowed.
    pub fn append_at(
        &self,
        date: NaiveDate,
        category: &str,
        amount: Amount,
        note: &str,
    ) -> LedgerResult<ExpenseRecord> {
        if !amount.value().is_finite() {
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }

        self.ensure_initialized()?;

        let record = ExpenseRecord::dated(date, category, amount, note);
        append_row(self.paths.ledger_file(), record.to_row())?;
        info!(category = %record.category, amount = %record.amount, "appended expense");

        Ok(record)
    }

    /// All expenses in file order
    ///
    /// Fails with `StoreAbsent` when the file is missing and `EmptyStore`
    /// when it holds only the header. Amounts are not parsed here, so a
    /// row with unreadable amount text is still listed.
    pub fn list_all(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let records = self.read_records()?;
        if records.is_empty() {
            return Err(LedgerError::EmptyStore);
        }
        Ok(records)
    }

    /// Sum of every amount, in file order
    ///
    /// Any row whose amount does not parse aborts the whole sum.
    pub fn total(&self) -> LedgerResult<Amount> {
        let rows = read_rows(self.paths.ledger_file())?;
        let total: Amount = rows
            .iter()
            .map(|row| row_amount(row, &parse_row(row)?))
            .sum::<LedgerResult<Amount>>()?;
        debug!(rows = rows.len(), %total, "computed total");
        Ok(total)
    }

    /// Expenses whose category equals `query`, ignoring case
    ///
    /// No match is a normal outcome: `found` is false and the subtotal zero.
    /// Only matching rows have their amounts parsed; a bad one aborts the
    /// whole search.
    pub fn filter_by_category(&self, query: &str) -> LedgerResult<CategoryReport> {
        let mut records = Vec::new();
        let mut subtotal = Amount::zero();

        for row in &read_rows(self.paths.ledger_file())? {
            let record = parse_row(row)?;
            if record.matches_category(query) {
                subtotal += row_amount(row, &record)?;
                records.push(record);
            }
        }

        let found = !records.is_empty();
        debug!(query, matches = records.len(), "filtered by category");

        Ok(CategoryReport {
            records,
            subtotal,
            found,
        })
    }

    /// Remove the expense at a 1-based display position
    ///
    /// Out-of-range positions leave the file untouched. On success the
    /// header and remaining rows are rewritten in their original order.
    pub fn delete_at(&self, position: usize) -> LedgerResult<ExpenseRecord> {
        let mut rows = read_rows(self.paths.ledger_file())?;
        let records = parse_rows(&rows)?;

        if records.is_empty() {
            return Err(LedgerError::EmptyStore);
        }
        if position < 1 || position > records.len() {
            return Err(LedgerError::InvalidSelection {
                position: position as i64,
                count: records.len(),
            });
        }

        let index = position - 1;
        let removed = records[index].clone();
        rows.remove(index);

        // Remaining rows are written back verbatim.
        write_rows_atomic(
            self.paths.ledger_file(),
            self.paths.temp_file(),
            HEADER,
            rows.iter().map(|row| &row.record),
        )?;
        info!(position, category = %removed.category, "deleted expense");

        Ok(removed)
    }

    fn read_records(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let rows = read_rows(self.paths.ledger_file())?;
        debug!(rows = rows.len(), "read ledger");
        parse_rows(&rows)
    }
}

fn parse_row(row: &CsvRow) -> LedgerResult<ExpenseRecord> {
    ExpenseRecord::from_row(row.record.iter())
        .map_err(|e| LedgerError::malformed(row.line, e.to_string()))
}

fn parse_rows(rows: &[CsvRow]) -> LedgerResult<Vec<ExpenseRecord>> {
    rows.iter().map(parse_row).collect()
}

fn row_amount(row: &CsvRow, record: &ExpenseRecord) -> LedgerResult<Amount> {
    record
        .parsed_amount()
        .map_err(|e| LedgerError::malformed(row.line, e.to_string()))
}

/// Parse user-supplied amount text
pub fn parse_amount(input: &str) -> LedgerResult<Amount> {
    Amount::parse(input).map_err(|e| LedgerError::InvalidAmount(e.to_string()))
}

/// Parse a user-supplied 1-based position
///
/// Text that is not a whole number is `InvalidInput`. A whole number below
/// 1, or too large to represent, is `InvalidSelection`. The upper bound is
/// checked by `delete_at`.
pub fn parse_selection(input: &str) -> LedgerResult<usize> {
    let trimmed = input.trim();
    let position: i64 = match trimmed.parse::<i64>() {
        Ok(position) => position,
        Err(e) => {
            return Err(match e.kind() {
                IntErrorKind::PosOverflow => LedgerError::InvalidSelection {
                    position: i64::MAX,
                    count: 0,
                },
                IntErrorKind::NegOverflow => LedgerError::InvalidSelection {
                    position: i64::MIN,
                    count: 0,
                },
                _ => LedgerError::InvalidInput(format!("'{}' is not a whole number", trimmed)),
            })
        }
    };

    usize::try_from(position)
        .ok()
        .filter(|&p| p >= 1)
        .ok_or(LedgerError::InvalidSelection { position, count: 0 })
}
