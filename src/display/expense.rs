//! Expense display formatting
//!
//! Every function returns the full block of text for one screen section,
//! newline-terminated, so the menu can write it in one go.

use crate::models::{Amount, ExpenseRecord};
use crate::storage::CategoryReport;

/// Format a line of `ch` repeated `width` times
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Banner printed once at startup
pub fn format_welcome_banner() -> String {
    format!(
        "\n{}\n   Welcome to Expense Manager!   \n{}\n",
        rule('#', 40),
        rule('#', 40)
    )
}

/// The main menu, without the trailing prompt
pub fn format_menu() -> String {
    let mut output = String::new();
    output.push_str(&format!("\n{}\n", rule('-', 30)));
    output.push_str("   POCKET EXPENSE TRACKER\n");
    output.push_str(&format!("{}\n", rule('-', 30)));
    output.push_str(" [1] Add New Expense\n");
    output.push_str(" [2] View All Expenses\n");
    output.push_str(" [3] See Total Spending\n");
    output.push_str(" [4] View Category Wise\n");
    output.push_str(" [5] Delete an Expense\n");
    output.push_str(" [6] Exit App\n");
    output.push_str(&format!("{}\n", rule('-', 30)));
    output
}

/// Framed section title, e.g. `ADD NEW EXPENSE`
pub fn format_title(title: &str, width: usize) -> String {
    format!("\n{}\n{}\n{}\n", rule('=', width), title, rule('=', width))
}

/// Confirmation after a successful add
pub fn format_saved() -> String {
    format!("{}\nSaved Successfully!\n{}\n", rule('-', 30), rule('-', 30))
}

/// Numbered table of every expense
pub fn format_expense_table(records: &[ExpenseRecord], currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<4} | {:<12} | {:<10} | {:<10}\n",
        "No.", "Date", "Category", "Amount"
    ));
    output.push_str(&rule('-', 45));
    output.push('\n');

    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "{:<4} | {:<12} | {:<10} | {} {}\n",
            i + 1,
            record.date,
            record.category,
            currency,
            record.amount
        ));
    }

    output
}

/// Grand total banner
pub fn format_total(total: Amount, currency: &str) -> String {
    format!(
        "\n{}\n TOTAL SPENT: {} {}\n{}\n",
        rule('*', 30),
        currency,
        total,
        rule('*', 30)
    )
}

/// Expenses for one category plus their subtotal
pub fn format_category_report(query: &str, report: &CategoryReport, currency: &str) -> String {
    let mut output = String::new();

    for record in &report.records {
        output.push_str(&format!(
            "{} | {} {} | {}\n",
            record.date,
            currency,
            record.amount,
            record.note
        ));
    }

    output.push_str(&rule('-', 30));
    output.push('\n');

    if report.found {
        output.push_str(&format!(
            "Total for {}: {} {}\n",
            query, currency, report.subtotal
        ));
    } else {
        output.push_str("No expenses found in this category.\n");
    }

    output
}

/// Numbered choices shown before asking which expense to delete
pub fn format_delete_choices(records: &[ExpenseRecord], currency: &str) -> String {
    let mut output = String::new();
    for (i, record) in records.iter().enumerate() {
        output.push_str(&format!(
            "[{}] {} - {} {} ({})\n",
            i + 1,
            record.category,
            currency,
            record.amount,
            record.date
        ));
    }
    output
}

/// Confirmation after a delete
pub fn format_deleted(record: &ExpenseRecord, currency: &str) -> String {
    format!(
        "Deleted: {} - {} {}\n",
        record.category, currency, record.amount
    )
}

/// Banner printed on exit
pub fn format_farewell() -> String {
    format!(
        "\n{}\n Thank you for using Expense Manager. \n           Goodbye!           \n{}\n\n",
        rule('#', 40),
        rule('#', 40)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(category: &str, amount: f64, note: &str) -> ExpenseRecord {
        ExpenseRecord::dated(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            category,
            Amount::new(amount),
            note,
        )
    }

    #[test]
    fn test_menu_lists_all_options() {
        let menu = format_menu();
        assert!(menu.contains("POCKET EXPENSE TRACKER"));
        assert!(menu.contains(" [1] Add New Expense"));
        assert!(menu.contains(" [6] Exit App"));
    }

    #[test]
    fn test_expense_table() {
        let records = vec![expense("Food", 12.5, "lunch"), expense("Rent", 800.0, "")];
        let table = format_expense_table(&records, "Rs.");

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "No.  | Date         | Category   | Amount    ");
        assert_eq!(lines[2], "1    | 2025-01-15   | Food       | Rs. 12.5");
        assert_eq!(lines[3], "2    | 2025-01-15   | Rent       | Rs. 800.0");
    }

    #[test]
    fn test_rows_show_amount_as_written() {
        let record = ExpenseRecord::from_row(["2025/01/15", "Food", "12.50", ""]).unwrap();
        let table = format_expense_table(std::slice::from_ref(&record), "Rs.");

        assert!(table.contains("1    | 2025/01/15   | Food       | Rs. 12.50\n"));
        assert_eq!(format_deleted(&record, "Rs."), "Deleted: Food - Rs. 12.50\n");
    }

    #[test]
    fn test_total() {
        let output = format_total(Amount::new(25.25), "Rs.");
        assert!(output.contains(" TOTAL SPENT: Rs. 25.25\n"));
    }

    #[test]
    fn test_category_report_found() {
        let report = CategoryReport {
            records: vec![expense("Travel", 20.0, "bus")],
            subtotal: Amount::new(20.0),
            found: true,
        };
        let output = format_category_report("travel", &report, "$");

        assert!(output.starts_with("2025-01-15 | $ 20.0 | bus\n"));
        assert!(output.contains("Total for travel: $ 20.0"));
    }

    #[test]
    fn test_category_report_not_found() {
        let report = CategoryReport {
            records: vec![],
            subtotal: Amount::zero(),
            found: false,
        };
        let output = format_category_report("travel", &report, "Rs.");
        assert!(output.contains("No expenses found in this category."));
    }

    #[test]
    fn test_delete_choices() {
        let records = vec![expense("A", 1.0, ""), expense("B", 2.5, "")];
        let output = format_delete_choices(&records, "Rs.");

        assert_eq!(
            output,
            "[1] A - Rs. 1.0 (2025-01-15)\n[2] B - Rs. 2.5 (2025-01-15)\n"
        );
    }

    #[test]
    fn test_deleted() {
        let output = format_deleted(&expense("B", 2.5, ""), "Rs.");
        assert_eq!(output, "Deleted: B - Rs. 2.5\n");
    }
}
