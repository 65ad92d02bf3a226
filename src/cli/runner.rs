//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{EnvStore, FileStore, HookConfig};
use crate::error::Result;
use crate::hook::MovielensHook;
use crate::pagination::{RecordStream, StopCondition, TerminationPolicy};
use futures::StreamExt;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let mut hook = self.build_hook();

        match &self.cli.command {
            Commands::Ratings {
                start_date,
                end_date,
                batch_size,
            } => {
                let stream = hook
                    .get_ratings(start_date.as_deref(), end_date.as_deref(), *batch_size)
                    .await?;
                self.emit_records(stream).await?;
            }
            Commands::Month {
                year,
                month,
                batch_size,
            } => {
                let stream = hook
                    .get_ratings_for_month(*year, *month, *batch_size)
                    .await?;
                self.emit_records(stream).await?;
            }
            Commands::Check => {
                let outcome = check_connection(&mut hook).await;
                println!("{}", check_status_line(hook.conn_id(), &outcome));
                if let Err(e) = &outcome {
                    warn!(conn_id = %hook.conn_id(), error = %e, "Connection check failed");
                }
                outcome?;
            }
        }

        hook.close();
        Ok(())
    }

    /// Hook configuration derived from the global flags
    pub fn hook_config(&self) -> HookConfig {
        let mut termination = TerminationPolicy::default();
        if self.cli.stop_on_empty_page {
            termination.stop_condition = StopCondition::EmptyPage;
        }
        termination.max_pages = self.cli.max_pages;

        HookConfig::builder(&self.cli.conn_id)
            .max_retries(self.cli.max_retries)
            .termination(termination)
            .build()
    }

    /// Build a hook reading connections from the file or the environment
    fn build_hook(&self) -> MovielensHook {
        let config = self.hook_config();
        match &self.cli.connections {
            Some(path) => MovielensHook::new(FileStore::new(path), config),
            None => MovielensHook::new(EnvStore::new(), config),
        }
    }

    /// Print records until the stream ends, failing on the first error
    async fn emit_records(&self, mut stream: RecordStream<'_>) -> Result<usize> {
        let start = Instant::now();
        let mut count = 0;

        while let Some(record) = stream.next().await {
            self.output_message(&record?);
            count += 1;
            if self.cli.max_records.is_some_and(|max| count >= max) {
                break;
            }
        }

        info!(
            "Fetched {count} records in {}ms",
            start.elapsed().as_millis()
        );
        Ok(count)
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Resolve the connection and fetch a single record
async fn check_connection(hook: &mut MovielensHook) -> Result<()> {
    let mut stream = hook.get_ratings(None, None, 1).await?;
    let first = stream.next().await;
    match first {
        Some(Err(e)) => Err(e),
        _ => Ok(()),
    }
}

/// One-line summary of a connection check
fn check_status_line(conn_id: &str, outcome: &Result<()>) -> String {
    match outcome {
        Ok(()) => format!("OK: connection '{conn_id}' is reachable"),
        Err(e) => format!("FAILED: connection '{conn_id}': {e}"),
    }
}
