//! Display formatting for terminal output
//!
//! Plain-text screens for the interactive menu: banners, the expense
//! table, totals, category reports and delete choices.

pub mod expense;

pub use expense::{
    format_category_report, format_delete_choices, format_deleted, format_expense_table,
    format_farewell, format_menu, format_saved, format_title, format_total,
    format_welcome_banner, rule,
};
