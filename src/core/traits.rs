//! Core trait for account directories
//!
//! This module defines the trait abstraction that lets the command session run
//! against either index backend: the single-threaded binary search tree or the
//! sharded concurrent map.

use crate::core::account_index::AccountIndex;
use crate::core::sharded_index::ShardedAccountIndex;
use crate::types::{Account, AccountNumber, Amount, DirectoryError};

/// Trait for looking up and mutating accounts by number
pub trait AccountDirectory {
    /// Add an account to the directory
    fn open(&mut self, account: Account) -> Result<(), DirectoryError>;

    /// Mutate an account using a closure
    ///
    /// Returns `AccountNotFound` for an unknown number. The closure's error is
    /// passed through unchanged.
    fn update<F, R>(&mut self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&mut Account) -> Result<R, DirectoryError>;

    /// Read an account using a closure
    fn inspect<F, R>(&self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&Account) -> R;

    /// Sum of every account's balance
    fn total_balance(&self) -> Result<Amount, DirectoryError>;

    /// Every reachable account's number and balance, ascending by number
    fn balances(&self) -> Vec<(AccountNumber, Amount)>;

    /// Number of accounts held
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AccountDirectory for AccountIndex {
    fn open(&mut self, account: Account) -> Result<(), DirectoryError> {
        self.insert(account)
    }

    fn update<F, R>(&mut self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&mut Account) -> Result<R, DirectoryError>,
    {
        let account = self
            .search_mut(number)
            .ok_or_else(|| DirectoryError::account_not_found(number))?;
        f(account)
    }

    fn inspect<F, R>(&self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&Account) -> R,
    {
        self.search(number)
            .map(f)
            .ok_or_else(|| DirectoryError::account_not_found(number))
    }

    fn total_balance(&self) -> Result<Amount, DirectoryError> {
        AccountIndex::total_balance(self)
    }

    // In-order walk; tolerated duplicates appear once per node
    fn balances(&self) -> Vec<(AccountNumber, Amount)> {
        self.iter()
            .map(|account| (account.number(), account.balance()))
            .collect()
    }

    fn len(&self) -> usize {
        AccountIndex::len(self)
    }
}

impl AccountDirectory for ShardedAccountIndex {
    fn open(&mut self, account: Account) -> Result<(), DirectoryError> {
        ShardedAccountIndex::open(self, account)
    }

    fn update<F, R>(&mut self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&mut Account) -> Result<R, DirectoryError>,
    {
        ShardedAccountIndex::update(self, number, f)
    }

    fn inspect<F, R>(&self, number: AccountNumber, f: F) -> Result<R, DirectoryError>
    where
        F: FnOnce(&Account) -> R,
    {
        ShardedAccountIndex::inspect(self, number, f)
    }

    fn total_balance(&self) -> Result<Amount, DirectoryError> {
        ShardedAccountIndex::total_balance(self)
    }

    fn balances(&self) -> Vec<(AccountNumber, Amount)> {
        ShardedAccountIndex::balances(self)
    }

    fn len(&self) -> usize {
        ShardedAccountIndex::len(self)
    }
}
