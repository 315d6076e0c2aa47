//! Account Directory Library
//! # Overview
//!
//! This library provides an in-memory directory of bank accounts, each with a
//! transaction ledger, driven by CSV command scripts.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, ledger, errors)
//! - [`algorithms`] - Bubble/merge sort and linear/binary search over ledgers
//! - [`core`] - Directory logic:
//!   - [`core::account_index`] - Binary search tree keyed by account number
//!   - [`core::sharded_index`] - Concurrent sharded index
//!   - [`core::session`] - Command execution against either index
//! - [`io`] - CSV readers and the text report
//! - [`strategy`] - Complete runs over a chosen index backend
//! - [`cli`] - CLI arguments parsing
//!
//! # Commands
//!
//! - **deposit** / **withdraw**: Move funds and record a ledger entry
//! - **history**: Show an account's balance and ledger
//! - **sort**: Show the ledger ordered by amount (bubble or merge sort)
//! - **find**: Locate a transaction by amount (linear or binary search)
//! - **queue-deposit** / **queue-withdraw** / **settle**: Defer operations and
//!   apply them later in arrival order
//! - **total** / **list**: Directory-wide balance sum and listing
//!
//! # Account Invariant
//!
//! An account's balance always equals its opening balance plus its deposits
//! minus its withdrawals, and never goes negative. Rejected operations leave
//! both the balance and the ledger untouched.

// Module declarations
pub mod algorithms;
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{AccountDirectory, AccountIndex, Command, Outcome, Session, ShardedAccountIndex};
pub use types::{
    Account, AccountNumber, Amount, DirectoryError, PendingTransaction, Transaction,
    TransactionKind,
};
