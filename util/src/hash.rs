//! Hasher defaults shared by the crates of this workspace.
use std::hash::BuildHasherDefault;

use zwohash::ZwoHasher;

/// The default [`BuildHasher`](std::hash::BuildHasher) used by the hash maps of this workspace.
pub type ZwoBuildHasher = BuildHasherDefault<ZwoHasher>;

/// A [`hashbrown::HashMap`] using the workspace's default hasher.
pub type ZwoHashMap<K, V> = hashbrown::HashMap<K, V, ZwoBuildHasher>;
