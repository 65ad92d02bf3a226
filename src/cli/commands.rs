//! CLI commands and argument parsing

use crate::config::DEFAULT_CONN_ID;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MovieLens ratings API client
#[derive(Parser, Debug)]
#[command(name = "movielens-hook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Connection identifier
    #[arg(long, global = true, default_value = DEFAULT_CONN_ID)]
    pub conn_id: String,

    /// Connections file (YAML); connections are read from
    /// MOVIELENS_CONN_<ID> environment variables when omitted
    #[arg(short = 'C', long, global = true)]
    pub connections: Option<PathBuf>,

    /// Maximum retries per page request
    #[arg(long, global = true, default_value = "3")]
    pub max_retries: u32,

    /// Stop paginating on an empty page even if the reported total is not reached
    #[arg(long, global = true)]
    pub stop_on_empty_page: bool,

    /// Maximum number of page requests per query
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Stop after this many records
    #[arg(long, global = true)]
    pub max_records: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch ratings between two dates
    Ratings {
        /// First day (inclusive), YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,

        /// Last day (exclusive), YYYY-MM-DD
        #[arg(long)]
        end_date: Option<String>,

        /// Records per page
        #[arg(long, default_value = "100")]
        batch_size: u32,
    },

    /// Fetch ratings for one calendar month
    Month {
        /// Year
        #[arg(long)]
        year: i32,

        /// Month (1-12)
        #[arg(long)]
        month: u32,

        /// Records per page
        #[arg(long, default_value = "100")]
        batch_size: u32,
    },

    /// Test the connection to the API
    Check,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
