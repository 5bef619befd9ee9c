//! Expense model
//!
//! One ledger entry: the date it was logged, a free-text category, an
//! amount, and an optional note. Rows in the ledger file map one-to-one
//! onto `ExpenseRecord` values through [`ExpenseRecord::to_row`] and
//! [`ExpenseRecord::from_row`].
//!
//! The date and amount are kept exactly as they appear in the file. A row
//! only needs its first three columns to be listed or deleted; the amount
//! is parsed on demand by the operations that add amounts up.

use chrono::{Local, NaiveDate};
use std::fmt;

use super::amount::Amount;

/// Date format used for new ledger rows
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Column names written as the first row of every ledger file
pub const HEADER: [&str; 4] = ["Date", "Category", "Amount", "Note"];

/// Column positions within a ledger row
const DATE_COL: usize = 0;
const CATEGORY_COL: usize = 1;
const AMOUNT_COL: usize = 2;
const NOTE_COL: usize = 3;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRecord {
    /// Day the expense was logged, as written in the file
    pub date: String,

    /// Free-text category, case preserved
    pub category: String,

    /// Amount text, as written in the file
    pub amount: String,

    /// Optional note
    pub note: String,
}

impl ExpenseRecord {
    /// Create an expense dated today (local time)
    pub fn new(category: impl Into<String>, amount: Amount, note: impl Into<String>) -> Self {
        Self::dated(Local::now().date_naive(), category, amount, note)
    }

    /// Create an expense with an explicit date
    pub fn dated(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Amount,
        note: impl Into<String>,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            category: category.into(),
            amount: amount.to_string(),
            note: note.into(),
        }
    }

    /// Parse the amount column
    pub fn parsed_amount(&self) -> Result<Amount, RowError> {
        Amount::parse(&self.amount).map_err(|_| RowError::InvalidAmount(self.amount.clone()))
    }

    /// Case-insensitive category comparison
    ///
    /// Both sides are lower-cased; no trimming or partial matching.
    pub fn matches_category(&self, query: &str) -> bool {
        self.category.to_lowercase() == query.to_lowercase()
    }

    /// Render as the four ledger columns
    pub fn to_row(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.note.as_str(),
        ]
    }

    /// Read a ledger row
    ///
    /// Rows need at least the date, category and amount columns. A missing
    /// note column reads as an empty note; extra columns are ignored. No
    /// column is validated beyond being present.
    pub fn from_row<'a, I>(fields: I) -> Result<Self, RowError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields: Vec<&str> = fields.into_iter().collect();

        Ok(Self {
            date: field(&fields, DATE_COL, "date")?.to_string(),
            category: field(&fields, CATEGORY_COL, "category")?.to_string(),
            amount: field(&fields, AMOUNT_COL, "amount")?.to_string(),
            note: fields.get(NOTE_COL).copied().unwrap_or_default().to_string(),
        })
    }
}

fn field<'a>(fields: &[&'a str], idx: usize, name: &'static str) -> Result<&'a str, RowError> {
    fields
        .get(idx)
        .copied()
        .ok_or(RowError::MissingField(name))
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.category, self.amount)?;
        if !self.note.is_empty() {
            write!(f, " ({})", self.note)?;
        }
        Ok(())
    }
}

/// Why a ledger row could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    MissingField(&'static str),
    InvalidAmount(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingField(name) => write!(f, "missing {} column", name),
            RowError::InvalidAmount(s) => write!(f, "invalid amount '{}'", s),
        }
    }
}

impl std::error::Error for RowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_expense_is_dated_today() {
        let expense = ExpenseRecord::new("Food", Amount::new(12.5), "lunch");
        assert_eq!(expense.date, Local::now().format(DATE_FORMAT).to_string());
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.note, "lunch");
    }

    #[test]
    fn test_to_row() {
        let expense = ExpenseRecord::dated(jan_15(), "Food", Amount::new(12.5), "lunch");
        assert_eq!(expense.to_row(), ["2025-01-15", "Food", "12.5", "lunch"]);

        let whole = ExpenseRecord::dated(jan_15(), "Rent", Amount::new(800.0), "");
        assert_eq!(whole.to_row()[2], "800.0");
    }

    #[test]
    fn test_from_row() {
        let expense = ExpenseRecord::from_row(["2025-01-15", "Travel", "20.25", "bus"]).unwrap();
        assert_eq!(expense.date, "2025-01-15");
        assert_eq!(expense.category, "Travel");
        assert_eq!(expense.parsed_amount().unwrap(), Amount::new(20.25));
        assert_eq!(expense.note, "bus");
    }

    #[test]
    fn test_from_row_without_note() {
        let expense = ExpenseRecord::from_row(["2025-01-15", "Travel", "3"]).unwrap();
        assert_eq!(expense.note, "");
    }

    #[test]
    fn test_from_row_keeps_text_as_written() {
        let expense = ExpenseRecord::from_row(["15/01/2025", "Travel", "ten", ""]).unwrap();
        assert_eq!(expense.date, "15/01/2025");
        assert_eq!(expense.amount, "ten");
        assert_eq!(
            expense.parsed_amount(),
            Err(RowError::InvalidAmount("ten".into()))
        );
    }

    #[test]
    fn test_from_row_missing_columns() {
        assert_eq!(
            ExpenseRecord::from_row(["2025-01-15", "Travel"]),
            Err(RowError::MissingField("amount"))
        );
        assert_eq!(
            ExpenseRecord::from_row(["2025-01-15"]),
            Err(RowError::MissingField("category"))
        );
    }

    #[test]
    fn test_matches_category_ignores_case_only() {
        let expense = ExpenseRecord::dated(jan_15(), "Travel", Amount::new(1.0), "");
        assert!(expense.matches_category("travel"));
        assert!(expense.matches_category("TRAVEL"));
        assert!(!expense.matches_category("trav"));
        assert!(!expense.matches_category(" travel"));
    }

    #[test]
    fn test_display() {
        let expense = ExpenseRecord::dated(jan_15(), "Food", Amount::new(12.5), "lunch");
        assert_eq!(expense.to_string(), "2025-01-15 Food 12.5 (lunch)");
    }
}
