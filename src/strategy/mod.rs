//! Processing strategy module for command scripts
//!
//! This module defines the Strategy pattern for the complete run of a command
//! script: loading the accounts file into a directory, executing every command
//! through a [`Session`], and writing the report. Each strategy picks a
//! different index backend, selected at runtime from the CLI.

use crate::cli::IndexKind;
use crate::core::{AccountDirectory, DuplicatePolicy, Session};
use crate::io::{write_error, write_outcome, AccountReader, CommandReader};
use crate::types::DirectoryError;
use std::io::Write;
use std::path::Path;

pub mod sharded;
pub mod tree;

pub use sharded::ShardedStrategy;
pub use tree::TreeStrategy;

/// Configuration for building a directory
#[derive(Clone, Debug, PartialEq, Default)]
pub struct IndexConfig {
    /// How the tree backend treats duplicate account numbers
    pub duplicate_policy: DuplicatePolicy,
    /// Shard count for the sharded backend; `None` uses dashmap's default
    pub shards: Option<usize>,
}

impl IndexConfig {
    /// Create an IndexConfig, validating the shard count
    ///
    /// A shard count that is not a power of two greater than one is replaced
    /// by the default, with a warning.
    pub fn new(duplicate_policy: DuplicatePolicy, shards: Option<usize>) -> Self {
        let shards = match shards {
            Some(count) if count < 2 || !count.is_power_of_two() => {
                tracing::warn!(
                    shards = count,
                    "Invalid shard count, expected a power of two >= 2; using default"
                );
                None
            }
            other => other,
        };

        Self {
            duplicate_policy,
            shards,
        }
    }
}

/// Processing strategy trait for complete command script runs
pub trait ProcessingStrategy: Send + Sync {
    /// Load accounts, run the command script and write the report
    ///
    /// # Arguments
    ///
    /// * `accounts_path` - CSV file of `account,balance` rows
    /// * `commands_path` - CSV file of `command,account,amount,algorithm` rows
    /// * `output` - Writer receiving the report
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or the report cannot
    /// be written. Malformed rows are logged and skipped; rejected commands are
    /// written to the report as `Error:` lines. Neither stops the run.
    fn process(
        &self,
        accounts_path: &Path,
        commands_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), DirectoryError>;
}

/// Create a processing strategy for the selected index backend
pub fn create_strategy(kind: IndexKind, config: IndexConfig) -> Box<dyn ProcessingStrategy> {
    match kind {
        IndexKind::Tree => Box::new(TreeStrategy::new(config.duplicate_policy)),
        IndexKind::Sharded => Box::new(ShardedStrategy::new(config.shards)),
    }
}

/// Shared pipeline used by every strategy
///
/// Both files are opened before any output is produced, so a missing command
/// script does not leave a half-written report behind.
pub(crate) fn run<D: AccountDirectory>(
    directory: D,
    accounts_path: &Path,
    commands_path: &Path,
    output: &mut dyn Write,
) -> Result<(), DirectoryError> {
    let accounts = AccountReader::from_path(accounts_path)?;
    let commands = CommandReader::from_path(commands_path)?;

    let mut session = Session::new(directory);

    for result in accounts {
        match result.and_then(|(number, balance)| session.open(number, balance)) {
            Ok(()) => {}
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => tracing::warn!(error = %e, "Skipping account"),
        }
    }
    tracing::info!(accounts = session.directory().len(), "directory loaded");

    for result in commands {
        match result {
            Ok(command) => match session.execute(command) {
                Ok(outcome) => write_outcome(&outcome, output)?,
                Err(e) => write_error(&e, output)?,
            },
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => tracing::warn!(error = %e, "Skipping command"),
        }
    }

    output.flush()?;
    Ok(())
}
