//! `UnionFind` efficiently tracks equivalences between integer indices.
use std::collections::BTreeMap;

use crate::Error;

#[cfg(test)]
#[path = "tests/test_union_find.rs"]
mod test_union_find;

/// `UnionFind` efficiently tracks equivalences between integer indices.
///
/// Equivalences are assumed to be *transitive*, i.e. if `x = y` and `y = z`, then `x = z` is
/// assumed to be true, and in fact, automatically discovered by this structure.
///
/// For each set of equivalent indices, this structure keeps track of a *representative*. Each
/// index starts out as its own representative, and if two indices are declared equivalent, the
/// representative of the first becomes the representative of both. The method `find` returns the
/// representative for any index.
///
/// There is no fixed universe of indices. Any index not seen so far is a singleton set, and the
/// parent table grows as needed when such an index takes part in a union. Since the table is a
/// `Vec`, the used indices should ideally be a contiguous range starting at `0`.
///
/// Unions are not balanced by rank or size: the first argument always keeps its representative.
/// This keeps representatives predictable from the order of unions, which callers of
/// [`PolyUnionFind`](crate::PolyUnionFind) may depend on.
///
/// ## Example ##
/// ```
/// use parcor_union_find::UnionFind;
///
/// let mut union_find = UnionFind::new();
///
/// assert_eq!(union_find.find(4), 4);
///
/// union_find.union(3, 4);
/// assert_eq!(union_find.find(4), 3);
///
/// union_find.union(1, 2);
/// union_find.union(2, 3);
/// assert_eq!(union_find.find(1), 1);
/// assert_eq!(union_find.find(4), 1);
/// ```
#[derive(Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Constructs an empty `UnionFind`.
    ///
    /// The returned struct obeys `find(a) == a` for all `a`.
    pub fn new() -> Self {
        UnionFind::default()
    }

    /// Constructs an empty `UnionFind`, with room for `capacity` indices.
    pub fn with_capacity(capacity: usize) -> Self {
        UnionFind {
            parent: Vec::with_capacity(capacity),
        }
    }

    /// Clears all equivalences, but retains any allocated memory.
    pub fn clear(&mut self) {
        self.parent.clear();
    }

    fn read_parent(&self, index: usize) -> usize {
        self.parent.get(index).copied().unwrap_or(index)
    }

    fn write_parent(&mut self, index: usize, parent: usize) {
        if let Some(parent_cell) = self.parent.get_mut(index) {
            *parent_cell = parent;
        } else {
            debug_assert!(self.parent.len() <= index);
            let len = self.parent.len();
            self.parent.extend(len..index);
            self.parent.push(parent);
        }
    }

    /// Returns the representative for an index without shortening any paths.
    ///
    /// This returns the same result as [`find`](Self::find) but only needs shared access.
    pub fn find_root(&self, mut index: usize) -> usize {
        loop {
            let parent = self.read_parent(index);
            if parent == index {
                return index;
            }
            index = parent;
        }
    }

    // Worst-case `find_root` performance is linear. To keep amortised time complexity
    // logarithmic, we memoise the result by pointing every traversed index at the root.
    fn update_root(&mut self, mut index: usize, root: usize) {
        // Loop invariant: `root` is the representative of `index`.
        loop {
            let parent = self.read_parent(index);
            if parent == root {
                break;
            }
            self.write_parent(index, root);
            index = parent;
        }
    }

    /// Returns the representative for an index. Indices are equivalent iff they have the same
    /// representative.
    ///
    /// This operation is guaranteed to return `index` itself for arguments
    /// `index >= self.len()`.
    ///
    /// The amortised time complexity of this operation is **O**(log N).
    pub fn find(&mut self, index: usize) -> usize {
        let root = self.find_root(index);
        self.update_root(index, root);
        root
    }

    /// Declares two indices to be equivalent. The new representative of both is the
    /// representative of the first index.
    ///
    /// If the indices are already equivalent, the operation returns `false` without making any
    /// changes. Otherwise it returns `true`.
    ///
    /// In both cases it also returns the original representatives of both arguments.
    ///
    /// The amortised time complexity of this operation is **O**(log N).
    pub fn union_full(&mut self, a: usize, b: usize) -> (bool, [usize; 2]) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            (false, [ra, rb])
        } else {
            log::trace!("union({a}, {b}): {rb} -> {ra}");
            // The first write is only needed to ensure that the parent table actually contains
            // `ra` and is a no-op otherwise.
            self.write_parent(ra, ra);
            self.write_parent(rb, ra);
            (true, [ra, rb])
        }
    }

    /// Declares two indices to be equivalent and returns their common representative.
    ///
    /// The new representative of both is the representative of the first index. If the indices
    /// are already equivalent this returns their representative without making any changes.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let (_, [ra, _]) = self.union_full(a, b);
        ra
    }

    /// Declares all given indices to be equivalent to the first one.
    ///
    /// The representative of the first index becomes the representative of all of them. Returns
    /// [`Error::EmptyUnion`] when no index is given.
    pub fn unions(&mut self, indices: impl IntoIterator<Item = usize>) -> Result<(), Error> {
        let mut indices = indices.into_iter();
        let first = indices.next().ok_or(Error::EmptyUnion)?;
        for index in indices {
            self.union(first, index);
        }
        Ok(())
    }

    /// Sets `index` to be its own representative, and updates other representatives to preserve
    /// all existing equivalences. Returns the previous representative.
    ///
    /// The amortised time complexity of this operation is **O**(log N).
    pub fn make_repr(&mut self, index: usize) -> usize {
        let root = self.find(index);
        self.write_parent(index, index);
        self.write_parent(root, index);
        root
    }

    /// Returns the number of tracked indices.
    ///
    /// It is guaranteed that `find(a) == a` if `a >= len()`, but the converse may not hold.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if no equivalences are known.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns an iterator that yields all tracked indices and their representatives.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        (0..self.len()).map(|index| (index, self.find_root(index)))
    }
}

impl std::fmt::Debug for UnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // prints non-trivial sets of equivalent indices, always printing the representative first
        let mut sets = BTreeMap::<usize, Vec<usize>>::new();
        for (index, repr) in self.iter() {
            if index != repr {
                sets.entry(repr).or_insert_with(|| vec![repr]).push(index);
            }
        }
        f.debug_set().entries(sets.values()).finish()
    }
}
