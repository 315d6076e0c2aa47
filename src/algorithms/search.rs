//! Searching algorithms
//!
//! Keys are compared with exact equality. Transaction amounts are fixed-point
//! decimals, so "the same amount" is well defined.

use crate::types::{Amount, Transaction};

/// Index of the first element whose key equals `target`, scanning left to right
pub fn linear_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Eq,
    F: Fn(&T) -> K,
{
    items.iter().position(|item| key(item) == *target)
}

/// Index of an element whose key equals `target`
///
/// `items` must already be sorted ascending by `key`; this is not checked. When
/// several elements match, any one of their indices may be returned.
pub fn binary_search_by_key<T, K, F>(items: &[T], target: &K, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // Half-open window [low, high)
    let (mut low, mut high) = (0, items.len());
    while low < high {
        let mid = low + (high - low) / 2;
        let candidate = key(&items[mid]);
        if candidate == *target {
            return Some(mid);
        }
        if candidate < *target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}

/// First transaction with exactly `target` amount
pub fn linear_search(transactions: &[Transaction], target: Amount) -> Option<usize> {
    linear_search_by_key(transactions, &target, Transaction::amount)
}

/// A transaction with exactly `target` amount in a slice sorted by amount
pub fn binary_search(transactions: &[Transaction], target: Amount) -> Option<usize> {
    binary_search_by_key(transactions, &target, Transaction::amount)
}
