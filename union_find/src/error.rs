//! Error type shared by the structures of this crate.
use thiserror::Error;

/// Errors returned by [`UnionFind`](crate::UnionFind), [`Renumber`](crate::Renumber) and
/// [`PolyUnionFind`](crate::PolyUnionFind).
#[derive(Debug, Error)]
pub enum Error {
    /// A union of several elements was requested without providing any element.
    #[error("cannot union an empty sequence of elements")]
    EmptyUnion,

    /// A value contains a NaN or infinite float, which JSON cannot encode distinctly.
    #[error("cannot encode non-finite float {0} as JSON")]
    NonFiniteFloat(f64),

    /// The [`Json`](crate::Json) serializer could not encode a value.
    #[error("failed to serialize element: {0}")]
    Serialize(#[from] serde_json::Error),
}
