//! Interactive menu
//!
//! Reads a numbered choice, dispatches it to the matching ledger
//! operation and redraws the menu until the user exits. Every ledger error
//! is turned into a short message here; only terminal I/O failures end
//! the loop early.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{
    format_category_report, format_delete_choices, format_deleted, format_expense_table,
    format_farewell, format_menu, format_saved, format_title, format_total,
    format_welcome_banner, rule,
};
use crate::error::{LedgerError, LedgerResult};
use crate::storage::{parse_amount, parse_selection, ExpenseStore};

/// A menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    ViewAll,
    Total,
    ByCategory,
    Delete,
    Exit,
}

impl MenuCommand {
    /// Map the typed option to a command
    ///
    /// Only the exact tokens `1` through `6` are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::ViewAll),
            "3" => Some(Self::Total),
            "4" => Some(Self::ByCategory),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The interactive menu driver
pub struct Menu<'a, R, W> {
    store: &'a ExpenseStore,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// Create a menu reading choices from `input` and writing to `output`
    pub fn new(store: &'a ExpenseStore, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            store,
            settings,
            input,
            output,
        }
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> LedgerResult<()> {
        self.write(&format_welcome_banner())?;

        if let Err(e) = self.store.ensure_initialized() {
            warn!(error = %e, "could not initialize ledger file");
        }

        loop {
            self.write(&format_menu())?;
            let choice = match self.prompt(" Select option (1-6): ")? {
                Some(choice) => choice,
                None => {
                    debug!("input closed, exiting");
                    self.write(&format_farewell())?;
                    return Ok(());
                }
            };

            let flow = match MenuCommand::parse(&choice) {
                Some(command) => self.dispatch(command)?,
                None => {
                    self.write("\n!!! Wrong input, please try again !!!\n")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: MenuCommand) -> LedgerResult<Flow> {
        debug!(?command, "dispatching menu command");
        match command {
            MenuCommand::Add => self.add_expense()?,
            MenuCommand::ViewAll => self.view_all()?,
            MenuCommand::Total => self.show_total()?,
            MenuCommand::ByCategory => self.view_by_category()?,
            MenuCommand::Delete => self.delete_expense()?,
            MenuCommand::Exit => {
                self.write(&format_farewell())?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn add_expense(&mut self) -> LedgerResult<()> {
        self.write(&format_title("      ADD NEW EXPENSE", 30))?;

        let Some(category) = self.prompt("Category (Food, Travel, etc): ")? else {
            return Ok(());
        };
        let Some(amount_text) = self.prompt("Amount: ")? else {
            return Ok(());
        };
        let amount = match parse_amount(&amount_text) {
            Ok(amount) => amount,
            Err(e) => {
                debug!(error = %e, "rejected amount");
                return self.write("Error: Amount must be a number!\n");
            }
        };
        let Some(note) = self.prompt("Note (optional): ")? else {
            return Ok(());
        };

        match self.store.append(&category, amount, &note) {
            Ok(_) => self.write(&format_saved()),
            Err(e) => {
                warn!(error = %e, "failed to save expense");
                self.write(&format!("Error: could not save expense ({})\n", e))
            }
        }
    }

    fn view_all(&mut self) -> LedgerResult<()> {
        self.write(&format_title("           YOUR EXPENSES", 40))?;

        match self.store.list_all() {
            Ok(records) => {
                let table = format_expense_table(&records, &self.settings.currency_symbol);
                self.write(&table)?;
            }
            Err(LedgerError::EmptyStore) => return self.write("No expenses yet.\n"),
            Err(e) if e.is_store_absent() => {
                self.write("File not found. Add an expense first.\n")?;
            }
            Err(e) => {
                warn!(error = %e, "failed to list expenses");
                self.write(&format!("Could not read expenses ({})\n", e))?;
            }
        }

        self.write(&format!("{}\n", rule('=', 40)))
    }

    fn show_total(&mut self) -> LedgerResult<()> {
        match self.store.total() {
            Ok(total) => {
                let output = format_total(total, &self.settings.currency_symbol);
                self.write(&output)
            }
            Err(e) => {
                warn!(error = %e, "failed to compute total");
                self.write("Could not calculate total.\n")
            }
        }
    }

    fn view_by_category(&mut self) -> LedgerResult<()> {
        let Some(query) = self.prompt("Enter category name to search: ")? else {
            return Ok(());
        };
        let query = query.to_lowercase();

        self.write(&format!(
            "\n--- Expenses for '{}' ---\n{}\n",
            query,
            rule('-', 30)
        ))?;

        match self.store.filter_by_category(&query) {
            Ok(report) => {
                let output =
                    format_category_report(&query, &report, &self.settings.currency_symbol);
                self.write(&output)
            }
            Err(e) => {
                warn!(error = %e, "failed to filter by category");
                self.write("Something went wrong reading the file.\n")
            }
        }
    }

    fn delete_expense(&mut self) -> LedgerResult<()> {
        self.write(&format_title("      DELETE EXPENSE", 30))?;

        let records = match self.store.list_all() {
            Ok(records) => records,
            Err(LedgerError::EmptyStore) => return self.write("Nothing to delete.\n"),
            Err(e) if e.is_store_absent() => return self.write("File not found.\n"),
            Err(e) => {
                warn!(error = %e, "failed to read expenses for delete");
                return self.write("Something went wrong reading the file.\n");
            }
        };

        let choices = format_delete_choices(&records, &self.settings.currency_symbol);
        self.write(&choices)?;
        self.write(&format!("{}\n", rule('-', 30)))?;

        let Some(input) = self.prompt("Enter number to delete: ")? else {
            return Ok(());
        };

        let result = parse_selection(&input).and_then(|position| self.store.delete_at(position));
        match result {
            Ok(removed) => {
                let output = format_deleted(&removed, &self.settings.currency_symbol);
                self.write(&output)
            }
            Err(LedgerError::InvalidInput(_)) => self.write("Please enter a valid number.\n"),
            Err(LedgerError::InvalidSelection { .. }) => self.write("Invalid number.\n"),
            Err(e) => {
                warn!(error = %e, "failed to delete expense");
                self.write(&format!("Could not delete expense ({})\n", e))
            }
        }
    }

    /// Print `text` without a newline and read one line
    ///
    /// Returns `None` once input is exhausted. Only the line terminator is
    /// stripped.
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        self.write(text)?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Ok(Some(trimmed.to_string()))
    }

    fn write(&mut self, text: &str) -> LedgerResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
