//! This crate defines a structure [`UnionFind`] that tracks equivalences between dense integer
//! indices, a structure [`Renumber`] that assigns dense indices to arbitrary values, and a
//! structure [`PolyUnionFind`] combining both to track equivalences between arbitrary values.
//!
//! Which values count as the same element is decided by a [`Serializer`]. The default [`Json`]
//! serializer compares values structurally, while [`KeyFn`] allows custom equivalences such as
//! case insensitive comparison of tokens.

#[doc(inline)]
pub use error::Error;
#[doc(inline)]
pub use poly_union_find::PolyUnionFind;
#[doc(inline)]
pub use renumber::Renumber;
#[doc(inline)]
pub use serialize::{Json, KeyFn, Serializer};
#[doc(inline)]
pub use union_find::UnionFind;

pub mod error;
pub mod poly_union_find;
pub mod renumber;
pub mod serialize;
pub mod union_find;
