use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use expense_ledger::cli::{Cli, Menu};
use expense_ledger::storage::ExpenseStore;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter("expense_ledger=warn,expenses=warn")
        .with_writer(io::stderr)
        .init();

    let settings = cli.settings();
    let store = ExpenseStore::new(cli.paths());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&store, &settings, stdin.lock(), stdout.lock())
        .run()
        .context("terminal I/O failed")?;

    Ok(())
}
