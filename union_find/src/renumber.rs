//! Dense integer indices for arbitrary values.
use std::hash::Hash;

use hashbrown::hash_map::Entry;
use parcor_util::hash::ZwoHashMap;

use crate::{Error, Json, KeyFn, Serializer};

/// Assigns a unique index to each distinct value.
///
/// Indices are handed out in the order values are first seen, starting at `0`, and are never
/// reused. Two values are considered the same if the [`Serializer`] `S` maps them to equal keys,
/// in which case the value seen first is the one remembered for the index.
///
/// ```
/// use parcor_union_find::Renumber;
///
/// let mut renumber = Renumber::new();
/// assert_eq!(renumber.num("foo").unwrap(), 0);
/// assert_eq!(renumber.num("bar").unwrap(), 1);
/// assert_eq!(renumber.num("foo").unwrap(), 0);
/// assert_eq!(renumber.un(0), Some(&"foo"));
/// assert_eq!(renumber.un(1), Some(&"bar"));
/// assert_eq!(renumber.un(2), None);
///
/// let mut renumber = Renumber::with_key(|token: &&str| token.to_lowercase());
/// assert_eq!(renumber.num("foo").unwrap(), 0);
/// assert_eq!(renumber.num("FOO").unwrap(), 0);
/// assert_eq!(renumber.un(0), Some(&"foo"));
/// ```
pub struct Renumber<T, S: Serializer<T> = Json> {
    serializer: S,
    index_from_key: ZwoHashMap<S::Key, usize>,
    value_from_index: Vec<T>,
}

impl<T: serde::Serialize> Renumber<T> {
    /// Constructs an empty `Renumber` comparing values by their JSON encoding.
    pub fn new() -> Self {
        Self::with_serializer(Json)
    }
}

impl<T: serde::Serialize> Default for Renumber<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Hash + Eq, F: Fn(&T) -> K> Renumber<T, KeyFn<F, K>> {
    /// Constructs an empty `Renumber` comparing values by the key computed by `key_fn`.
    pub fn with_key(key_fn: F) -> Self {
        Self::with_serializer(KeyFn::new(key_fn))
    }
}

impl<T, S: Serializer<T>> Renumber<T, S> {
    /// Constructs an empty `Renumber` comparing values using the given serializer.
    pub fn with_serializer(serializer: S) -> Self {
        Renumber {
            serializer,
            index_from_key: Default::default(),
            value_from_index: vec![],
        }
    }

    /// Returns the index of `value`, assigning the next unused index if no equivalent value was
    /// seen before.
    ///
    /// This only fails when the serializer fails to compute a key for `value`.
    pub fn num(&mut self, value: T) -> Result<usize, Error> {
        let key = self.key(&value)?;
        Ok(self.num_key(key, value))
    }

    pub(crate) fn key(&self, value: &T) -> Result<S::Key, Error> {
        self.serializer.serialize(value)
    }

    /// `key` must be the serialized form of `value`.
    pub(crate) fn num_key(&mut self, key: S::Key, value: T) -> usize {
        match self.index_from_key.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let index = self.value_from_index.len();
                log::trace!("renumber: new index {index}");
                entry.insert(index);
                self.value_from_index.push(value);
                index
            }
        }
    }

    /// Returns the index of `value` if an equivalent value was seen before, without registering
    /// it otherwise.
    pub fn get(&self, value: &T) -> Result<Option<usize>, Error> {
        let key = self.key(value)?;
        Ok(self.index_from_key.get(&key).copied())
    }

    /// Returns the value registered for `index`, or `None` if the index was not assigned yet.
    pub fn un(&self, index: usize) -> Option<&T> {
        self.value_from_index.get(index)
    }

    /// Returns the number of assigned indices.
    pub fn len(&self) -> usize {
        self.value_from_index.len()
    }

    /// Returns `true` if no index was assigned yet.
    pub fn is_empty(&self) -> bool {
        self.value_from_index.is_empty()
    }

    /// Returns all registered values, ordered by their index.
    pub fn values(&self) -> &[T] {
        &self.value_from_index
    }

    /// Returns the serializer used to compare values.
    pub fn serializer(&self) -> &S {
        &self.serializer
    }
}

impl<T: Clone, S: Serializer<T> + Clone> Clone for Renumber<T, S>
where
    S::Key: Clone,
{
    fn clone(&self) -> Self {
        Renumber {
            serializer: self.serializer.clone(),
            index_from_key: self.index_from_key.clone(),
            value_from_index: self.value_from_index.clone(),
        }
    }
}

impl<T: std::fmt::Debug, S: Serializer<T>> std::fmt::Debug for Renumber<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.value_from_index.iter().enumerate())
            .finish()
    }
}
