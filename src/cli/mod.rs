//! CLI front end
//!
//! Launch options parsed with clap and the interactive menu they start.

pub mod args;
pub mod menu;

pub use args::Cli;
pub use menu::{Menu, MenuCommand};
