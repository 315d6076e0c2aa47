//! Per-account transaction storage
//!
//! This module provides the two sequences every account owns:
//! - `TransactionLedger` - append-only history of applied transactions
//! - `PendingQueue` - FIFO of deposits and withdrawals waiting to be settled

use super::transaction::{PendingTransaction, Transaction};
use std::collections::VecDeque;

/// Append-only history of an account's applied transactions
///
/// Insertion order is preserved and entries are never removed, so the ledger
/// grows monotonically for the lifetime of the account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionLedger {
    entries: Vec<Transaction>,
}

impl TransactionLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        TransactionLedger {
            entries: Vec::new(),
        }
    }

    pub(crate) fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the recorded transactions in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.entries.iter()
    }

    /// Copy the ledger contents
    ///
    /// The returned vector is independent of the ledger: sorting or otherwise
    /// mutating it leaves the recorded history untouched.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.clone()
    }
}

impl<'a> IntoIterator for &'a TransactionLedger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Queue of transactions waiting to be applied to an account
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingQueue {
    queue: VecDeque<PendingTransaction>,
}

impl PendingQueue {
    pub fn new() -> Self {
        PendingQueue {
            queue: VecDeque::new(),
        }
    }

    /// Add a transaction to the back of the queue
    pub fn enqueue(&mut self, pending: PendingTransaction) {
        self.queue.push_back(pending);
    }

    /// Take the transaction at the front of the queue, if any
    pub fn dequeue(&mut self) -> Option<PendingTransaction> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
