//! CLI module
//!
//! Command-line interface for fetching ratings.
//!
//! # Commands
//!
//! - `ratings` - Fetch ratings for an optional date window
//! - `month` - Fetch ratings for one calendar month
//! - `check` - Test the connection to the API, failing when it is unreachable

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
