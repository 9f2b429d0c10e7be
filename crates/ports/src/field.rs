//! Structured field values and field sets.

use std::collections::BTreeMap;
use std::time::{Duration, SystemTime};

/// An accumulated field set attached to a derived logger handle.
///
/// Keys are unique; a later write of the same key overwrites the earlier one.
/// Iteration order is byte-wise lexicographic by key, which is what makes
/// repeated encodings of the same field set deterministic. Insertion order is
/// never significant.
pub type Fields = BTreeMap<String, FieldValue>;

/// A typed field value after encoding.
///
/// The variants mirror the native typed-field representations of the engines
/// we bridge: the most specific representation is chosen at conversion time
/// via the `From` rules below, and anything without a specific rule goes
/// through [`FieldValue::reflect`], the generic structural fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value (`Option::None`, nil-like inputs). Encodes as null.
    None,
    /// Boolean.
    Bool(bool),
    /// Signed 8-bit integer.
    I8(i8),
    /// Signed 16-bit integer.
    I16(i16),
    /// Signed 32-bit integer.
    I32(i32),
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 32-bit float.
    F32(f32),
    /// 64-bit float.
    F64(f64),
    /// UTF-8 string.
    Str(String),
    /// Raw byte sequence. Encodes as base64 text.
    Bytes(Vec<u8>),
    /// Wall-clock timestamp. Encodes as RFC3339 text.
    Timestamp(SystemTime),
    /// Time interval. Encodes as an integer count of nanoseconds, never as a
    /// formatted duration string.
    Duration(Duration),
    /// An error, rendered as its display message.
    Error(String),
    /// Homogeneous or mixed sequence of values.
    Seq(Vec<FieldValue>),
    /// Structurally serialized value (the reflective fallback).
    Object(serde_json::Value),
}

impl FieldValue {
    /// Encode an arbitrary serializable value structurally.
    ///
    /// This is the universal fallback of the encoding table: it can't fail
    /// the logging call. A value that does not serialize degrades to
    /// [`FieldValue::None`] rather than erroring.
    pub fn reflect<T: serde::Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(encoded) => Self::Object(encoded),
            Err(_) => Self::None,
        }
    }

    /// Encode an error as its display message.
    pub fn from_error(err: &(dyn std::error::Error + '_)) -> Self {
        Self::Error(err.to_string())
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),+ $(,)?) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    )+};
}

impl_from_primitive!(
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => Str,
    Duration => Duration,
    SystemTime => Timestamp,
);

impl From<isize> for FieldValue {
    fn from(value: isize) -> Self {
        Self::I64(value as i64)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<char> for FieldValue {
    fn from(value: char) -> Self {
        Self::Str(value.to_string())
    }
}

// Byte sequences take the dedicated binary representation, not Seq.
impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for FieldValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::None,
        }
    }
}

macro_rules! impl_from_sequence {
    ($($ty:ty),+ $(,)?) => {$(
        impl From<Vec<$ty>> for FieldValue {
            fn from(values: Vec<$ty>) -> Self {
                Self::Seq(values.into_iter().map(Into::into).collect())
            }
        }

        impl From<&[$ty]> for FieldValue {
            fn from(values: &[$ty]) -> Self {
                Self::Seq(values.iter().cloned().map(Into::into).collect())
            }
        }
    )+};
}

impl_from_sequence!(
    bool, i8, i16, i32, i64, u16, u32, u64, f32, f64, String, Duration, SystemTime,
);

impl From<Vec<&str>> for FieldValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(values: &[&str]) -> Self {
        Self::Seq(values.iter().copied().map(Into::into).collect())
    }
}
