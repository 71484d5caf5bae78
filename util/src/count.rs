//! Occurrence counting.
use std::{borrow::Borrow, hash::Hash};

use crate::hash::ZwoHashMap;

/// Counts how often each key was seen.
///
/// ```
/// use parcor_util::Count;
///
/// let mut count = Count::default();
/// assert_eq!(count.inc(1), 1);
/// assert_eq!(count.inc(1), 2);
/// assert_eq!(count.inc(2), 1);
/// assert_eq!(count.get(&1), 2);
/// assert_eq!(count.get(&3), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Count<K> {
    counts: ZwoHashMap<K, usize>,
}

impl<K> Default for Count<K> {
    fn default() -> Self {
        Count {
            counts: Default::default(),
        }
    }
}

impl<K: Hash + Eq> Count<K> {
    /// Constructs an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the count of `key` and returns the new count.
    pub fn inc(&mut self, key: K) -> usize {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    /// Returns the count of `key`, which is `0` for keys never passed to [`inc`](Self::inc).
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Returns the number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no key was counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Returns an iterator over all seen keys and their counts, in unspecified order.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }
}

/// Answers whether a key is seen for the first time.
#[derive(Clone, Debug)]
pub struct UniqueCheck<K> {
    count: Count<K>,
}

impl<K> Default for UniqueCheck<K> {
    fn default() -> Self {
        UniqueCheck {
            count: Default::default(),
        }
    }
}

impl<K: Hash + Eq> UniqueCheck<K> {
    /// Constructs a check for which every key is still unseen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` and returns `true` iff this is its first occurrence.
    pub fn check(&mut self, key: K) -> bool {
        self.count.inc(key) == 1
    }
}
