//! Sequences sorted by a fixed key.
//!
//! A [`SortedBy`] can only be built by sorting, so anything that reads it (the
//! median in particular) can rely on the order instead of trusting the caller.

use std::marker::PhantomData;

use super::aggregate::SiteSummary;

/// Extracts the numeric key a sequence is ordered by.
pub trait SortKey<T> {
    fn key(item: &T) -> f64;
}

/// Orders sites by request duration.
#[derive(Debug, Clone, Copy)]
pub struct ByElapsed;

/// Orders sites by homepage size.
#[derive(Debug, Clone, Copy)]
pub struct BySize;

/// Orders plain numbers by their own value.
#[derive(Debug, Clone, Copy)]
pub struct ByValue;

impl SortKey<SiteSummary> for ByElapsed {
    fn key(item: &SiteSummary) -> f64 {
        item.elapsed_seconds
    }
}

impl SortKey<SiteSummary> for BySize {
    fn key(item: &SiteSummary) -> f64 {
        item.size_kb as f64
    }
}

impl SortKey<f64> for ByValue {
    fn key(item: &f64) -> f64 {
        *item
    }
}

impl SortKey<u64> for ByValue {
    fn key(item: &u64) -> f64 {
        *item as f64
    }
}

/// Items in ascending order of `K`.
///
/// Sorting is stable: items with equal keys keep their original relative order.
#[derive(Debug, Clone)]
pub struct SortedBy<T, K> {
    items: Vec<T>,
    _key: PhantomData<K>,
}

impl<T, K: SortKey<T>> SortedBy<T, K> {
    pub fn new(mut items: Vec<T>) -> Self {
        items.sort_by(|a, b| K::key(a).total_cmp(&K::key(b)));
        Self {
            items,
            _key: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// The `n` smallest items, smallest first.
    pub fn first(&self, n: usize) -> &[T] {
        &self.items[..n.min(self.items.len())]
    }

    /// The `n` largest items, still in ascending order (largest last).
    pub fn last(&self, n: usize) -> &[T] {
        let len = self.items.len();
        &self.items[len - n.min(len)..]
    }

    /// Median of the sort key.
    ///
    /// For an even length this is the mean of the two middle values (indices
    /// `n/2 - 1` and `n/2`); for an odd length it is the value at `n/2`.
    /// Returns `None` for an empty sequence.
    pub fn median(&self) -> Option<f64> {
        let n = self.items.len();
        if n == 0 {
            return None;
        }
        let index = n / 2;
        if n % 2 == 0 {
            Some((K::key(&self.items[index]) + K::key(&self.items[index - 1])) / 2.0)
        } else {
            Some(K::key(&self.items[index]))
        }
    }
}
