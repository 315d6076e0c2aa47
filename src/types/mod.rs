//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: The account record and its settlement result
//! - `ledger`: Transaction history and pending queue owned by each account
//! - `transaction`: Transaction records, identifiers and amounts
//! - `error`: Error types for the account directory

pub mod account;
pub mod error;
pub mod ledger;
pub mod transaction;

pub use account::{Account, Settlement};
pub use error::DirectoryError;
pub use ledger::{PendingQueue, TransactionLedger};
pub use transaction::{AccountNumber, Amount, PendingTransaction, Transaction, TransactionKind};
