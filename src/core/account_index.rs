//! Account index module
//!
//! This module provides the `AccountIndex`, a binary search tree that maps
//! account numbers to accounts.
//!
//! The AccountIndex is responsible for:
//! - Owning every account node in the directory
//! - Inserting accounts by key without rebalancing
//! - Exact-key lookup along the unique `<` / `>=` descent path
//! - Folding over every account (total balance, ordered listing)
//!
//! # Ordering
//!
//! A key strictly less than a node's key goes to its left subtree; every other
//! key, including an equal one, goes right. With no rebalancing, inserting keys
//! in sorted order degrades the tree to a list and lookups to O(n).

use crate::types::{Account, AccountNumber, Amount, DirectoryError};
use rust_decimal::Decimal;
use std::fmt;

/// How the index treats an insert whose key is already present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Insert anyway; the new node lands in the right subtree of the existing
    /// one and is shadowed by it on lookup
    #[default]
    Tolerate,

    /// Refuse the insert with `DuplicateAccount`, leaving the tree unchanged
    Reject,
}

struct Node {
    account: Account,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(account: Account) -> Self {
        Node {
            account,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of accounts keyed by account number
///
/// Not `Clone`, and `Debug` and `Drop` walk the tree with an explicit stack,
/// since a tree built from sorted keys is as deep as it is long.
#[derive(Default)]
pub struct AccountIndex {
    root: Option<Box<Node>>,
    len: usize,
    policy: DuplicatePolicy,
}

impl AccountIndex {
    /// Create an empty index that tolerates duplicate keys
    pub fn new() -> Self {
        Self::with_policy(DuplicatePolicy::default())
    }

    /// Create an empty index with the given duplicate policy
    pub fn with_policy(policy: DuplicatePolicy) -> Self {
        AccountIndex {
            root: None,
            len: 0,
            policy,
        }
    }

    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Insert an account
    ///
    /// Descends from the root, going left when the new key is strictly less
    /// than the node's key and right otherwise, and attaches a new leaf.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAccount` only when the policy is
    /// [`DuplicatePolicy::Reject`] and the key is already present. With the
    /// default policy the insert always succeeds.
    pub fn insert(&mut self, account: Account) -> Result<(), DirectoryError> {
        let number = account.number();

        if self.policy == DuplicatePolicy::Reject && self.search(number).is_some() {
            return Err(DirectoryError::duplicate_account(number));
        }

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if number < node.account.number() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Box::new(Node::new(account)));
        self.len += 1;

        tracing::trace!(account = number, size = self.len, "account inserted");
        Ok(())
    }

    /// Find the account with the given number
    ///
    /// Returns the first match on the descent path. If duplicates were
    /// inserted, that is the one nearest the root.
    pub fn search(&self, number: AccountNumber) -> Option<&Account> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let key = node.account.number();
            if number == key {
                return Some(&node.account);
            }
            current = if number < key {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Find the account with the given number for mutation
    pub fn search_mut(&mut self, number: AccountNumber) -> Option<&mut Account> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            let key = node.account.number();
            if number == key {
                return Some(&mut node.account);
            }
            current = if number < key {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }
        None
    }

    /// Sum of every account's balance
    ///
    /// Visits each node exactly once. An empty index totals zero.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the sum does not fit in an amount.
    pub fn total_balance(&self) -> Result<Amount, DirectoryError> {
        let mut total = Decimal::ZERO;
        let mut stack: Vec<&Node> = self.root.as_deref().into_iter().collect();

        while let Some(node) = stack.pop() {
            total = total
                .checked_add(node.account.balance())
                .ok_or_else(|| DirectoryError::total_overflow("total_balance"))?;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        Ok(total)
    }

    /// Number of nodes in the tree, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(&Node, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();

        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Some(left) = node.left.as_deref() {
                stack.push((left, level + 1));
            }
            if let Some(right) = node.right.as_deref() {
                stack.push((right, level + 1));
            }
        }

        deepest
    }

    /// Iterate over every account in ascending key order
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }
}

/// In-order iterator over the accounts of an [`AccountIndex`]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a Node>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Account;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.account)
    }
}

impl fmt::Debug for AccountIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountIndex")
            .field("policy", &self.policy)
            .field("len", &self.len)
            .field("accounts", &DebugAccounts(self))
            .finish()
    }
}

struct DebugAccounts<'a>(&'a AccountIndex);

impl fmt::Debug for DebugAccounts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl Drop for AccountIndex {
    fn drop(&mut self) {
        // Detach children before each node is freed so no drop recurses
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a AccountIndex {
    type Item = &'a Account;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    fn index_of(accounts: &[(AccountNumber, i64)]) -> AccountIndex {
        let mut index = AccountIndex::new();
        for &(number, balance) in accounts {
            index.insert(Account::new(number, dec(balance)).unwrap()).unwrap();
        }
        index
    }

    #[test]
    fn test_search_and_total_balance() {
        let index = index_of(&[(100, 50), (50, 20), (150, 10)]);

        assert_eq!(index.search(50).map(Account::balance), Some(dec(20)));
        assert_eq!(index.total_balance(), Ok(dec(80)));
        assert_eq!(index.len(), 3);
        assert_eq!(index.depth(), 2);
    }

    #[test]
    fn test_empty_index() {
        let index = AccountIndex::new();
        assert!(index.is_empty());
        assert!(index.search(1).is_none());
        assert_eq!(index.total_balance(), Ok(Decimal::ZERO));
        assert_eq!(index.depth(), 0);
        assert_eq!(index.iter().count(), 0);
    }

    #[rstest]
    #[case::absent_between(75)]
    #[case::absent_below(1)]
    #[case::absent_above(1000)]
    fn test_search_missing_key(#[case] number: AccountNumber) {
        let index = index_of(&[(100, 50), (50, 20), (150, 10)]);
        assert!(index.search(number).is_none());
    }

    #[test]
    fn test_search_mut_updates_in_place() {
        let mut index = index_of(&[(100, 50), (50, 20)]);

        index.search_mut(50).unwrap().deposit(dec(5)).unwrap();

        assert_eq!(index.search(50).unwrap().balance(), dec(25));
        assert_eq!(index.total_balance(), Ok(dec(75)));
    }

    #[test]
    fn test_iter_is_in_key_order() {
        let index = index_of(&[(100, 1), (50, 1), (150, 1), (75, 1), (25, 1)]);
        let numbers: Vec<_> = index.iter().map(Account::number).collect();
        assert_eq!(numbers, vec![25, 50, 75, 100, 150]);
    }

    #[test]
    fn test_sorted_insertion_degrades_to_list() {
        let accounts: Vec<_> = (1..=64).map(|n| (n, 1)).collect();
        let index = index_of(&accounts);

        assert_eq!(index.depth(), 64);
        assert_eq!(index.search(64).map(Account::number), Some(64));
        assert_eq!(index.total_balance(), Ok(dec(64)));
    }

    #[test]
    fn test_deep_sorted_tree_drops_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(64 * 1024)
            .spawn(|| {
                let mut index = AccountIndex::new();
                for number in 0..20_000 {
                    index.insert(Account::empty(number)).unwrap();
                }
                assert_eq!(index.depth(), 20_000);
                assert_eq!(index.search(19_999).map(Account::number), Some(19_999));
                assert!(format!("{:?}", index).starts_with("AccountIndex"));
                drop(index);
            })
            .unwrap();

        handle.join().expect("dropping a degenerate tree overflowed the stack");
    }

    #[test]
    fn test_tolerated_duplicate_is_shadowed() {
        let mut index = AccountIndex::new();
        index.insert(Account::new(10, dec(1)).unwrap()).unwrap();
        index.insert(Account::new(10, dec(2)).unwrap()).unwrap();

        assert_eq!(index.len(), 2);
        // The first-inserted node sits above the duplicate on the descent path
        assert_eq!(index.search(10).unwrap().balance(), dec(1));
        // Both nodes still count towards the total
        assert_eq!(index.total_balance(), Ok(dec(3)));
    }

    #[test]
    fn test_rejected_duplicate_leaves_tree_unchanged() {
        let mut index = AccountIndex::with_policy(DuplicatePolicy::Reject);
        index.insert(Account::new(10, dec(1)).unwrap()).unwrap();

        let result = index.insert(Account::new(10, dec(2)).unwrap());

        assert_eq!(result, Err(DirectoryError::duplicate_account(10)));
        assert_eq!(index.len(), 1);
        assert_eq!(index.total_balance(), Ok(dec(1)));
    }

    #[test]
    fn test_total_balance_overflow() {
        let mut index = AccountIndex::new();
        index.insert(Account::new(1, Decimal::MAX).unwrap()).unwrap();
        index.insert(Account::new(2, Decimal::MAX).unwrap()).unwrap();

        assert!(matches!(
            index.total_balance(),
            Err(DirectoryError::ArithmeticOverflow { account: None, .. })
        ));
    }
}
