//! Thread-safe account index
//!
//! This module provides the `ShardedAccountIndex`, an alternative to the
//! binary search tree for callers that share one directory across threads.
//!
//! # Design
//!
//! Accounts live in a `DashMap`, which splits its entries over independently
//! locked shards. Opening an account locks one shard; deposits and withdrawals
//! run while holding the lock on that account's entry, so two threads mutating
//! the same account are serialized and the balance always matches the ledger.
//! Different accounts in different shards proceed in parallel.
//!
//! Unlike the tree, this index is always key-unique: a hash map cannot hold
//! two entries under one account number.

use crate::types::{Account, AccountNumber, Amount, DirectoryError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;

/// Thread-safe account index keyed by account number
#[derive(Debug)]
pub struct ShardedAccountIndex {
    accounts: DashMap<AccountNumber, Account>,
}

impl Default for ShardedAccountIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl ShardedAccountIndex {
    /// Create an empty index with dashmap's default shard count
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Create an empty index with a specific shard count
    ///
    /// # Panics
    ///
    /// Panics unless `shards` is a power of two greater than one. The CLI
    /// validates it through `IndexConfig` first.
    pub fn with_shards(shards: usize) -> Self {
        Self {
            accounts: DashMap::with_shard_amount(shards),
        }
    }

    /// Add an account
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` if the number is already taken.
    pub fn open(&self, account: Account) -> Result<(), DirectoryError> {
        let number = account.number();
        match self.accounts.entry(number) {
            Entry::Occupied(_) => Err(DirectoryError::duplicate_account(number)),
            Entry::Vacant(slot) => {
                slot.insert(account);
                tracing::trace!(account = number, "account opened");
                Ok(())
            }
        }
    }

    /// Run `f` against an account while holding its entry lock
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has this number, otherwise
    /// whatever `f` returns.
    pub fn update<F, R>(&self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&mut Account) -> Result<R, DirectoryError>,
    {
        let mut entry = self
            .accounts
            .get_mut(&number)
            .ok_or_else(|| DirectoryError::account_not_found(number))?;
        f(entry.value_mut())
    }

    /// Read an account while holding a shared lock on its entry
    pub fn inspect<F, R>(&self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&Account) -> R,
    {
        let entry = self
            .accounts
            .get(&number)
            .ok_or_else(|| DirectoryError::account_not_found(number))?;
        Ok(f(entry.value()))
    }

    /// Sum of every account's balance
    ///
    /// Shards are read one after another, so under concurrent mutation the
    /// total reflects each account at the moment its shard was visited.
    pub fn total_balance(&self) -> Result<Amount, DirectoryError> {
        self.accounts.iter().try_fold(Decimal::ZERO, |total, entry| {
            total
                .checked_add(entry.value().balance())
                .ok_or_else(|| DirectoryError::total_overflow("total_balance"))
        })
    }

    /// Every account's number and balance, ascending by number
    pub fn balances(&self) -> Vec<(AccountNumber, Amount)> {
        let mut balances: Vec<_> = self
            .accounts
            .iter()
            .map(|entry| (*entry.key(), entry.value().balance()))
            .collect();
        balances.sort_by_key(|&(number, _)| number);
        balances
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
