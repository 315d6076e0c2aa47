//! Binary search tree strategy
//!
//! Runs the command script against an [`AccountIndex`], the single-threaded
//! tree backend. This is the default strategy.

use crate::core::{AccountIndex, DuplicatePolicy};
use crate::strategy::{run, ProcessingStrategy};
use crate::types::DirectoryError;
use std::io::Write;
use std::path::Path;

/// Tree-backed processing strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeStrategy {
    policy: DuplicatePolicy,
}

impl TreeStrategy {
    /// Create a strategy whose index applies the given duplicate policy
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self { policy }
    }
}

impl ProcessingStrategy for TreeStrategy {
    fn process(
        &self,
        accounts_path: &Path,
        commands_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), DirectoryError> {
        run(
            AccountIndex::with_policy(self.policy),
            accounts_path,
            commands_path,
            output,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn process(policy: DuplicatePolicy, accounts: &str, commands: &str) -> String {
        let accounts = create_temp_csv(accounts);
        let commands = create_temp_csv(commands);
        let mut output = Vec::new();

        TreeStrategy::new(policy)
            .process(accounts.path(), commands.path(), &mut output)
            .expect("Processing failed");

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_tree_strategy_runs_commands() {
        let output = process(
            DuplicatePolicy::Tolerate,
            "account,balance\n100,50\n50,20\n150,10\n",
            "command,account,amount,algorithm\n\
             withdraw,100,100,\n\
             deposit,50,5,\n\
             total,,,\n",
        );

        assert_eq!(
            output,
            "Error: Insufficient funds for account 100: balance 50, requested 100\n\
             Account #50: deposited $5.00, balance $25.00\n\
             Total balance: $85.00\n"
        );
    }

    #[test]
    fn test_tree_strategy_tolerates_duplicates_by_default() {
        let accounts = "account,balance\n7,1\n7,2\n";
        let commands = "command,account,amount,algorithm\nlist,,,\ntotal,,,\n";

        let tolerated = process(DuplicatePolicy::Tolerate, accounts, commands);
        assert_eq!(
            tolerated,
            "Account #7 | Balance: $1.00\nAccount #7 | Balance: $2.00\nTotal balance: $3.00\n"
        );

        let rejected = process(DuplicatePolicy::Reject, accounts, commands);
        assert_eq!(rejected, "Account #7 | Balance: $1.00\nTotal balance: $1.00\n");
    }

    #[test]
    fn test_tree_strategy_handles_missing_file() {
        let commands = create_temp_csv("command,account,amount,algorithm\n");
        let mut output = Vec::new();

        let result = TreeStrategy::default().process(
            Path::new("nonexistent.csv"),
            commands.path(),
            &mut output,
        );

        assert!(matches!(result, Err(DirectoryError::FileNotFound { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_tree_strategy_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TreeStrategy>();
    }
}
