//! Strategies deciding which values are considered the same element.
use std::{hash::Hash, marker::PhantomData};

use crate::Error;

/// Maps values to keys, where values with equal keys are treated as the same element.
///
/// Implementations must be deterministic: serializing the same value twice must produce equal keys.
pub trait Serializer<T: ?Sized> {
    /// The key values are compared by.
    type Key: Hash + Eq;

    /// Computes the key of a value.
    fn serialize(&self, value: &T) -> Result<Self::Key, Error>;
}

/// Compares values by their JSON encoding, i.e. structurally.
///
/// JSON has no encoding for NaN or infinite floats (`serde_json` writes them as `null`), so
/// values containing them are rejected with [`Error::NonFiniteFloat`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Json;

impl<T: serde::Serialize + ?Sized> Serializer<T> for Json {
    type Key = String;

    fn serialize(&self, value: &T) -> Result<String, Error> {
        // Other failures are reported by `serde_json` below.
        if let Err(FloatCheckError::NonFinite(float)) = value.serialize(FiniteFloats) {
            return Err(Error::NonFiniteFloat(float));
        }
        Ok(serde_json::to_string(value)?)
    }
}

#[derive(Debug, thiserror::Error)]
enum FloatCheckError {
    #[error("non-finite float {0}")]
    NonFinite(f64),
    #[error("{0}")]
    Custom(String),
}

impl serde::ser::Error for FloatCheckError {
    fn custom<M: std::fmt::Display>(msg: M) -> Self {
        FloatCheckError::Custom(msg.to_string())
    }
}

/// Walks a value, failing on the first NaN or infinite float.
struct FiniteFloats;

type Check = Result<(), FloatCheckError>;

macro_rules! accept_scalars {
    ($($method:ident: $ty:ty),* $(,)?) => {
        $(fn $method(self, _: $ty) -> Check {
            Ok(())
        })*
    };
}

macro_rules! check_compound {
    ($($tr:ident :: $method:ident($($key:ty)?)),* $(,)?) => {
        $(impl serde::ser::$tr for FiniteFloats {
            type Ok = ();
            type Error = FloatCheckError;

            fn $method<T: serde::Serialize + ?Sized>(
                &mut self,
                $(_: $key,)?
                value: &T,
            ) -> Check {
                value.serialize(FiniteFloats)
            }

            fn end(self) -> Check {
                Ok(())
            }
        })*
    };
}

check_compound!(
    SerializeSeq::serialize_element(),
    SerializeTuple::serialize_element(),
    SerializeTupleStruct::serialize_field(),
    SerializeTupleVariant::serialize_field(),
    SerializeStruct::serialize_field(&'static str),
    SerializeStructVariant::serialize_field(&'static str),
);

impl serde::ser::SerializeMap for FiniteFloats {
    type Ok = ();
    type Error = FloatCheckError;

    fn serialize_key<T: serde::Serialize + ?Sized>(&mut self, key: &T) -> Check {
        key.serialize(FiniteFloats)
    }

    fn serialize_value<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Check {
        value.serialize(FiniteFloats)
    }

    fn end(self) -> Check {
        Ok(())
    }
}

impl serde::Serializer for FiniteFloats {
    type Ok = ();
    type Error = FloatCheckError;
    type SerializeSeq = Self;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Self;
    type SerializeMap = Self;
    type SerializeStruct = Self;
    type SerializeStructVariant = Self;

    accept_scalars!(
        serialize_bool: bool,
        serialize_i8: i8,
        serialize_i16: i16,
        serialize_i32: i32,
        serialize_i64: i64,
        serialize_i128: i128,
        serialize_u8: u8,
        serialize_u16: u16,
        serialize_u32: u32,
        serialize_u64: u64,
        serialize_u128: u128,
        serialize_char: char,
        serialize_str: &str,
        serialize_bytes: &[u8],
        serialize_unit_struct: &'static str,
    );

    fn serialize_f32(self, v: f32) -> Check {
        self.serialize_f64(v.into())
    }

    fn serialize_f64(self, v: f64) -> Check {
        if v.is_finite() {
            Ok(())
        } else {
            Err(FloatCheckError::NonFinite(v))
        }
    }

    fn serialize_none(self) -> Check {
        Ok(())
    }

    fn serialize_some<T: serde::Serialize + ?Sized>(self, value: &T) -> Check {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Check {
        Ok(())
    }

    fn serialize_unit_variant(self, _: &'static str, _: u32, _: &'static str) -> Check {
        Ok(())
    }

    fn serialize_newtype_struct<T: serde::Serialize + ?Sized>(
        self,
        _: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: serde::Serialize + ?Sized>(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        value: &T,
    ) -> Check {
        value.serialize(self)
    }

    fn serialize_seq(self, _: Option<usize>) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_tuple(self, _: usize) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_tuple_struct(self, _: &'static str, _: usize) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_map(self, _: Option<usize>) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_struct(self, _: &'static str, _: usize) -> Result<Self, FloatCheckError> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _: &'static str,
        _: u32,
        _: &'static str,
        _: usize,
    ) -> Result<Self, FloatCheckError> {
        Ok(self)
    }
}

/// Compares values by the key computed by a closure.
///
/// ```
/// use parcor_union_find::{KeyFn, Serializer};
///
/// let lower = KeyFn::new(|token: &String| token.to_lowercase());
/// assert_eq!(
///     lower.serialize(&"FOO".to_string()).unwrap(),
///     lower.serialize(&"foo".to_string()).unwrap(),
/// );
/// ```
pub struct KeyFn<F, K> {
    key_fn: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> KeyFn<F, K> {
    /// Wraps a closure computing the key of a value.
    pub fn new(key_fn: F) -> Self {
        KeyFn {
            key_fn,
            _key: PhantomData,
        }
    }
}

impl<F: Clone, K> Clone for KeyFn<F, K> {
    fn clone(&self) -> Self {
        KeyFn::new(self.key_fn.clone())
    }
}

impl<F, K> std::fmt::Debug for KeyFn<F, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyFn").finish_non_exhaustive()
    }
}

impl<T: ?Sized, K: Hash + Eq, F: Fn(&T) -> K> Serializer<T> for KeyFn<F, K> {
    type Key = K;

    fn serialize(&self, value: &T) -> Result<K, Error> {
        Ok((self.key_fn)(value))
    }
}
