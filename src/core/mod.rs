//! Core directory logic module
//!
//! This module contains the account directory components:
//! - `traits` - Trait abstraction over interchangeable index backends
//! - `account_index` - Binary search tree keyed by account number
//! - `sharded_index` - Thread-safe sharded index for concurrent callers
//! - `session` - Command execution against a directory

pub mod account_index;
pub mod session;
pub mod sharded_index;
pub mod traits;

pub use account_index::{AccountIndex, DuplicatePolicy};
pub use session::{Command, Outcome, Session};
pub use sharded_index::ShardedAccountIndex;
pub use traits::AccountDirectory;
