//! Sorting algorithms
//!
//! Both sorts order ascending by a caller-supplied key and are stable:
//! elements with equal keys keep their relative order.

use crate::types::Transaction;

/// Bubble sort in place by key
///
/// Adjacent elements are swapped only when the left key is strictly greater,
/// so equal keys never move past each other. O(n²) comparisons. An already
/// sorted slice is left untouched.
pub fn bubble_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if key(&items[j]) > key(&items[j + 1]) {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Merge sort in place by key
///
/// Sorts the whole slice. See [`merge_sort_range_by_key`].
pub fn merge_sort_by_key<T, K, F>(items: &mut [T], key: F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if let Some(high) = items.len().checked_sub(1) {
        merge_sort_range_by_key(items, 0, high, &key);
    }
}

/// Merge sort the inclusive range `low..=high` in place by key
///
/// The range is split at `(low + high) / 2`; each half is sorted recursively
/// and merged back through temporary buffers. On equal keys the merge takes
/// from the left run, which makes the sort stable. `low >= high` is a no-op.
///
/// # Panics
///
/// Panics if `high` is out of bounds for `items` while `low < high`.
pub fn merge_sort_range_by_key<T, K, F>(items: &mut [T], low: usize, high: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if low >= high {
        return;
    }

    let mid = low + (high - low) / 2;
    merge_sort_range_by_key(items, low, mid, key);
    merge_sort_range_by_key(items, mid + 1, high, key);
    merge(items, low, mid, high, key);
}

fn merge<T, K, F>(items: &mut [T], low: usize, mid: usize, high: usize, key: &F)
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let left = items[low..=mid].to_vec();
    let right = items[mid + 1..=high].to_vec();

    let (mut i, mut j, mut k) = (0, 0, low);
    while i < left.len() && j < right.len() {
        if key(&left[i]) <= key(&right[j]) {
            items[k] = left[i].clone();
            i += 1;
        } else {
            items[k] = right[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        items[k] = item.clone();
        k += 1;
    }
}

/// Bubble sort transactions ascending by amount
pub fn bubble_sort(transactions: &mut [Transaction]) {
    bubble_sort_by_key(transactions, Transaction::amount);
}

/// Merge sort transactions ascending by amount
pub fn merge_sort(transactions: &mut [Transaction]) {
    merge_sort_by_key(transactions, Transaction::amount);
}
