//! `PolyUnionFind` tracks equivalences between arbitrary values.
use std::{collections::BTreeMap, hash::Hash};

use crate::{Error, Json, KeyFn, Renumber, Serializer, UnionFind};

#[cfg(test)]
#[path = "tests/test_poly_union_find.rs"]
mod test_poly_union_find;

/// `PolyUnionFind` tracks equivalences between arbitrary values.
///
/// This combines a [`Renumber`], which assigns an index to every value the first time it is seen,
/// with a [`UnionFind`] over those indices. There is no need to declare the set of values up front:
/// any value not seen so far is its own representative.
///
/// Representatives follow the rules of [`UnionFind`], i.e. after `union(x, y)` the previous
/// representative of `x` represents both groups. In particular the representative is not
/// necessarily the smallest value of a group.
///
/// ## Example ##
/// ```
/// use parcor_union_find::PolyUnionFind;
///
/// let mut tokens = PolyUnionFind::with_key(|token: &String| token.to_lowercase());
/// let token = |s: &str| s.to_string();
///
/// assert_eq!(tokens.find(token("cat")).unwrap(), "cat");
///
/// tokens.union(token("Cat"), token("dog")).unwrap();
/// assert_eq!(tokens.find(token("DOG")).unwrap(), "cat");
/// ```
pub struct PolyUnionFind<T, S: Serializer<T> = Json> {
    union_find: UnionFind,
    renumber: Renumber<T, S>,
}

impl<T: serde::Serialize> PolyUnionFind<T> {
    /// Constructs an empty `PolyUnionFind` comparing values by their JSON encoding.
    pub fn new() -> Self {
        Self::with_serializer(Json)
    }
}

impl<T: serde::Serialize> Default for PolyUnionFind<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, K: Hash + Eq, F: Fn(&T) -> K> PolyUnionFind<T, KeyFn<F, K>> {
    /// Constructs an empty `PolyUnionFind` comparing values by the key computed by `key_fn`.
    pub fn with_key(key_fn: F) -> Self {
        Self::with_serializer(KeyFn::new(key_fn))
    }
}

impl<T, S: Serializer<T>> PolyUnionFind<T, S> {
    /// Constructs an empty `PolyUnionFind` comparing values using the given serializer.
    pub fn with_serializer(serializer: S) -> Self {
        PolyUnionFind {
            union_find: UnionFind::new(),
            renumber: Renumber::with_serializer(serializer),
        }
    }

    /// Returns the index of the representative of `value`, registering `value` if necessary.
    pub fn repr(&mut self, value: T) -> Result<usize, Error> {
        let index = self.renumber.num(value)?;
        Ok(self.union_find.find(index))
    }

    /// Declares all given values to be equivalent to the first one.
    ///
    /// Returns [`Error::EmptyUnion`] when no value is given.
    ///
    /// All values are serialized before any of them is registered, so on error nothing changes.
    pub fn unions(&mut self, values: impl IntoIterator<Item = T>) -> Result<(), Error> {
        let keyed = values
            .into_iter()
            .map(|value| Ok((self.renumber.key(&value)?, value)))
            .collect::<Result<Vec<_>, Error>>()?;
        let mut indices = keyed
            .into_iter()
            .map(|(key, value)| self.renumber.num_key(key, value));
        let anchor = indices.next().ok_or(Error::EmptyUnion)?;
        for index in indices {
            self.union_find.union(anchor, index);
        }
        Ok(())
    }

    /// Returns the underlying assignment of indices to values.
    pub fn renumber(&self) -> &Renumber<T, S> {
        &self.renumber
    }

    /// Returns the underlying equivalences between indices.
    pub fn union_find(&self) -> &UnionFind {
        &self.union_find
    }

    fn group_indices(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut groups = BTreeMap::<usize, Vec<usize>>::new();
        for index in 0..self.renumber.len() {
            let repr = self.union_find.find_root(index);
            let group = groups.entry(repr).or_insert_with(|| vec![repr]);
            if index != repr {
                group.push(index);
            }
        }
        groups
    }

    fn value(&self, index: usize) -> &T {
        // Representatives are always indices of registered values.
        &self.renumber.values()[index]
    }
}

impl<T: Clone, S: Serializer<T>> PolyUnionFind<T, S> {
    /// Returns the representative of `value`, registering `value` if necessary.
    ///
    /// A value that was never part of a union is its own representative. If an equivalent value
    /// was registered before, this returns the representative of that value.
    pub fn find(&mut self, value: T) -> Result<T, Error> {
        let repr = self.repr(value)?;
        Ok(self.value(repr).clone())
    }

    /// Declares two values to be equivalent and returns their common representative.
    ///
    /// The new representative of both is the representative of the first value.
    pub fn union(&mut self, a: T, b: T) -> Result<T, Error> {
        let (key_a, key_b) = (self.renumber.key(&a)?, self.renumber.key(&b)?);
        let a = self.renumber.num_key(key_a, a);
        let b = self.renumber.num_key(key_b, b);
        let repr = self.union_find.union(a, b);
        Ok(self.value(repr).clone())
    }

    /// Returns all groups of at least two equivalent registered values.
    ///
    /// Each group lists its representative first, followed by the remaining values in the order
    /// they were registered. Groups are ordered by when their representative was registered.
    pub fn groups(&self) -> Vec<Vec<T>> {
        self.collect_groups(|group| group.len() > 1)
    }

    /// Returns the partition of all registered values into groups, including singletons.
    ///
    /// Groups are laid out as for [`groups`](Self::groups), and every registered value occurs in
    /// exactly one group.
    pub fn partition(&self) -> Vec<Vec<T>> {
        self.collect_groups(|_| true)
    }

    fn collect_groups(&self, keep: impl Fn(&[usize]) -> bool) -> Vec<Vec<T>> {
        self.group_indices()
            .into_values()
            .filter(|group| keep(group))
            .map(|group| group.into_iter().map(|index| self.value(index).clone()).collect())
            .collect()
    }
}

impl<T: std::fmt::Debug, S: Serializer<T>> std::fmt::Debug for PolyUnionFind<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // prints non-trivial sets of equivalent values, always printing the representative first
        let groups = self.group_indices();
        f.debug_set()
            .entries(groups.values().filter(|group| group.len() > 1).map(|group| {
                group
                    .iter()
                    .map(|&index| self.value(index))
                    .collect::<Vec<_>>()
            }))
            .finish()
    }
}
