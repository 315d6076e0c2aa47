//! Sort and search utilities over ledger snapshots
//!
//! This module provides pure, stateless functions that operate on a snapshot
//! of an account's ledger (or any slice, through the `*_by_key` forms):
//! - `sort` - Bubble sort and merge sort, ascending and stable
//! - `search` - Linear search and binary search over a key
//!
//! [`sort`] and [`search`] pick the algorithm at runtime for callers that take
//! the choice from user input.

pub mod search;
pub mod sort;

pub use search::{binary_search, binary_search_by_key, linear_search, linear_search_by_key};
pub use sort::{
    bubble_sort, bubble_sort_by_key, merge_sort, merge_sort_by_key, merge_sort_range_by_key,
};

use crate::types::{Amount, Transaction};
use std::fmt;
use std::str::FromStr;

/// Available sorting algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    Bubble,
    #[default]
    Merge,
}

/// Available searching algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchAlgorithm {
    Linear,
    #[default]
    Binary,
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Bubble => f.write_str("bubble"),
            SortAlgorithm::Merge => f.write_str("merge"),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchAlgorithm::Linear => f.write_str("linear"),
            SearchAlgorithm::Binary => f.write_str("binary"),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "merge" => Ok(SortAlgorithm::Merge),
            other => Err(format!("Unknown sort algorithm '{}'", other)),
        }
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(SearchAlgorithm::Linear),
            "binary" => Ok(SearchAlgorithm::Binary),
            other => Err(format!("Unknown search algorithm '{}'", other)),
        }
    }
}

/// Sort transactions ascending by amount, in place
pub fn sort(transactions: &mut [Transaction], algorithm: SortAlgorithm) {
    match algorithm {
        SortAlgorithm::Bubble => bubble_sort(transactions),
        SortAlgorithm::Merge => merge_sort(transactions),
    }
}

/// Find a transaction with exactly `target` amount
///
/// `Binary` requires `transactions` to be sorted ascending by amount.
pub fn search(
    transactions: &[Transaction],
    target: Amount,
    algorithm: SearchAlgorithm,
) -> Option<usize> {
    match algorithm {
        SearchAlgorithm::Linear => linear_search(transactions, target),
        SearchAlgorithm::Binary => binary_search(transactions, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionKind;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn ledger(amounts: &[i64]) -> Vec<Transaction> {
        amounts
            .iter()
            .map(|&a| Transaction::new(TransactionKind::Deposit, Decimal::new(a, 0)))
            .collect()
    }

    fn amounts(transactions: &[Transaction]) -> Vec<Decimal> {
        transactions.iter().map(Transaction::amount).collect()
    }

    #[test]
    fn test_merge_sort_then_search() {
        let mut snapshot = ledger(&[30, 5, 10]);

        sort(&mut snapshot, SortAlgorithm::Merge);

        assert_eq!(amounts(&snapshot), amounts(&ledger(&[5, 10, 30])));
        assert_eq!(search(&snapshot, Decimal::new(10, 0), SearchAlgorithm::Binary), Some(1));
        assert_eq!(search(&snapshot, Decimal::new(99, 0), SearchAlgorithm::Linear), None);
    }

    #[test]
    fn test_sorts_produce_identical_orderings() {
        let mixed = vec![
            Transaction::new(TransactionKind::Deposit, Decimal::new(10, 0)),
            Transaction::new(TransactionKind::Withdraw, Decimal::new(5, 0)),
            Transaction::new(TransactionKind::Withdraw, Decimal::new(10, 0)),
            Transaction::new(TransactionKind::Deposit, Decimal::new(5, 0)),
        ];

        let mut bubbled = mixed.clone();
        let mut merged = mixed;
        sort(&mut bubbled, SortAlgorithm::Bubble);
        sort(&mut merged, SortAlgorithm::Merge);

        assert_eq!(bubbled, merged);
        // Ties keep ledger order
        assert_eq!(merged[0].kind(), TransactionKind::Withdraw);
        assert_eq!(merged[2].kind(), TransactionKind::Deposit);
    }

    #[test]
    fn test_equality_is_exact_across_scales() {
        let snapshot = ledger(&[10]);
        // 10.00 and 10 are the same amount
        assert_eq!(linear_search(&snapshot, Decimal::new(1000, 2)), Some(0));
    }

    #[rstest]
    #[case::bubble("bubble", SortAlgorithm::Bubble)]
    #[case::merge("MERGE", SortAlgorithm::Merge)]
    fn test_sort_algorithm_from_str(#[case] input: &str, #[case] expected: SortAlgorithm) {
        assert_eq!(input.parse::<SortAlgorithm>(), Ok(expected));
    }

    #[rstest]
    #[case::linear("linear", SearchAlgorithm::Linear)]
    #[case::binary("Binary", SearchAlgorithm::Binary)]
    fn test_search_algorithm_from_str(#[case] input: &str, #[case] expected: SearchAlgorithm) {
        assert_eq!(input.parse::<SearchAlgorithm>(), Ok(expected));
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        assert!("quick".parse::<SortAlgorithm>().is_err());
        assert!("hash".parse::<SearchAlgorithm>().is_err());
    }
}
