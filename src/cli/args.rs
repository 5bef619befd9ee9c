//! Command-line entry point
//!
//! The tool takes no options: all ledger interaction happens in the menu,
//! against `expenses.csv` in the current directory. clap only provides
//! `--help` and `--version`.

use clap::Parser;

use crate::config::{LedgerPaths, Settings};

#[derive(Parser, Debug)]
#[command(
    name = "expenses",
    author = "Kaylee Beyene",
    version,
    about = "Pocket expense tracker backed by a CSV ledger",
    long_about = "Pocket expense tracker: log dated, categorized expenses to \
                  expenses.csv in the current directory, list them, total them, \
                  filter by category and delete entries from an interactive menu."
)]
pub struct Cli {}

impl Cli {
    /// Ledger paths for this session
    pub fn paths(&self) -> LedgerPaths {
        LedgerPaths::new()
    }

    /// Display settings for this session
    pub fn settings(&self) -> Settings {
        Settings::default()
    }
}
