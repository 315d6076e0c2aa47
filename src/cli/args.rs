use crate::core::DuplicatePolicy;
use crate::strategy::IndexConfig;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;
use tracing::Level;

/// Run a command script against an in-memory account directory
#[derive(Parser, Debug)]
#[command(name = "account-directory")]
#[command(about = "Run a command script against an in-memory account directory", long_about = None)]
pub struct CliArgs {
    /// CSV file with the opening accounts
    #[arg(value_name = "ACCOUNTS", help = "Path to the accounts CSV file (account,balance)")]
    pub accounts_file: PathBuf,

    /// CSV file with the commands to run
    #[arg(
        value_name = "COMMANDS",
        help = "Path to the command script CSV file (command,account,amount,algorithm)"
    )]
    pub commands_file: PathBuf,

    /// Index backend holding the accounts
    #[arg(
        long = "index",
        value_name = "INDEX",
        default_value = "tree",
        help = "Index backend: 'tree' for the binary search tree or 'sharded' for the concurrent map"
    )]
    pub index: IndexKind,

    /// Duplicate account number handling (tree index only)
    #[arg(
        long = "duplicates",
        value_name = "POLICY",
        default_value = "tolerate",
        help = "Duplicate account numbers: 'tolerate' keeps both, 'reject' skips the later one"
    )]
    pub duplicates: DuplicatesArg,

    /// Shard count (sharded index only)
    #[arg(
        long = "shards",
        value_name = "COUNT",
        help = "Number of shards, a power of two >= 2 (default: chosen by dashmap)"
    )]
    pub shards: Option<usize>,

    /// Diagnostic verbosity on stderr
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    pub verbose: u8,
}

/// Available index backends
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum IndexKind {
    Tree,
    Sharded,
}

/// Duplicate policy as spelled on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DuplicatesArg {
    Tolerate,
    Reject,
}

impl From<DuplicatesArg> for DuplicatePolicy {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::Tolerate => DuplicatePolicy::Tolerate,
            DuplicatesArg::Reject => DuplicatePolicy::Reject,
        }
    }
}

impl CliArgs {
    /// Create an IndexConfig from CLI arguments
    ///
    /// An invalid shard count is replaced by the default with a warning, so
    /// call this after logging is initialized.
    pub fn to_index_config(&self) -> IndexConfig {
        IndexConfig::new(self.duplicates.into(), self.shards)
    }

    /// Maximum log level selected by the `-v` flags
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
