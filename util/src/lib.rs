//! Parallel Corpus Alignment - Shared Utility Code
#![warn(missing_docs)]

pub mod count;
pub mod hash;
pub mod lists;

#[doc(inline)]
pub use count::{Count, UniqueCheck};
