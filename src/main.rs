//! Account Directory CLI
//!
//! Loads opening accounts from one CSV file and runs a command script from
//! another, writing one report block per command to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv commands.csv
//! cargo run -- --index sharded --shards 16 accounts.csv commands.csv
//! cargo run -- --duplicates reject -vv accounts.csv commands.csv
//! ```
//!
//! # Index Backends
//!
//! - **tree**: Unbalanced binary search tree (default)
//! - **sharded**: Concurrent sharded map, always rejects duplicate numbers
//!
//! Diagnostics go to stderr; the report is the only thing written to stdout.
//!
//! # Exit Codes
//!
//! - 0: Success, including runs where individual commands were rejected
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use account_directory::cli;
use account_directory::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let strategy = strategy::create_strategy(args.index, args.to_index_config());

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&args.accounts_file, &args.commands_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
