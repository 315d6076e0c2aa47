//! Sharded concurrent strategy
//!
//! Runs the command script against a [`ShardedAccountIndex`]. Commands are
//! still executed in script order; the backend differs from the tree in being
//! safe to share across threads and in always rejecting duplicate account
//! numbers.

use crate::core::ShardedAccountIndex;
use crate::strategy::{run, ProcessingStrategy};
use crate::types::DirectoryError;
use std::io::Write;
use std::path::Path;

/// Sharded-map-backed processing strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct ShardedStrategy {
    shards: Option<usize>,
}

impl ShardedStrategy {
    /// Create a strategy with an already validated shard count
    ///
    /// `None` keeps dashmap's default.
    pub fn new(shards: Option<usize>) -> Self {
        Self { shards }
    }
}

impl ProcessingStrategy for ShardedStrategy {
    fn process(
        &self,
        accounts_path: &Path,
        commands_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), DirectoryError> {
        let index = match self.shards {
            Some(shards) => ShardedAccountIndex::with_shards(shards),
            None => ShardedAccountIndex::new(),
        };
        run(index, accounts_path, commands_path, output)
    }
}
