//! Dynamic value representation for encodable data.
//!
//! This module provides the [`Value`] enum, the input side of the encoder. Every shape
//! the encoder knows about has a variant: primitives, sequences, mappings, error
//! records, already-encoded nodes, and opaque host values that no rule accepts.
//!
//! ## Core Types
//!
//! - [`Value`]: An enum representing any value handed to the encoder
//! - [`Number`]: Integers, big integers and floats
//!
//! ## Creating Values
//!
//! ```rust
//! use serde_lispify::{Value, Number};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//! let list = Value::from(vec!["a", "b"]);
//!
//! assert!(number.is_number());
//! assert_eq!(text.as_str(), Some("hello"));
//! ```
//!
//! ## Converting from Rust Types
//!
//! ```rust
//! use serde_lispify::{to_value, Value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value: Value = to_value(&Point { x: 10, y: 20 }).unwrap();
//! assert!(value.is_mapping());
//! ```

use crate::{EncodedNode, ErrorRecord, LispMap};
use chrono::NaiveDate;
use num_bigint::BigInt;
use std::fmt;

/// A dynamically-typed value accepted by the encoder.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::{Value, Number};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(LispMap),
    Error(ErrorRecord),
    /// A host value with no encoding, known only by its diagnostic text.
    Opaque(String),
    /// A value that has already been encoded. Encoding it again is a no-op.
    Encoded(Box<EncodedNode>),
}

/// A numeric value.
///
/// Integers render as plain decimal digits. Floats render in their shortest
/// round-trip decimal form and always carry a fractional part, so `1.0` stays a
/// float for the Lisp reader.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::Number;
///
/// assert_eq!(Number::Integer(-7).to_string(), "-7");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// assert_eq!(Number::Float(3.0).to_string(), "3.0");
/// assert_eq!(Number::Float(1e21).to_string(), "1000000000000000000000.0");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Big(BigInt),
}

impl Number {
    /// Returns `true` if this is an integer of any width.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(
            self,
            Number::Integer(_) | Number::Unsigned(_) | Number::Big(_)
        )
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `false` for NaN and the infinities, which have no literal form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::Number;
    ///
    /// assert!(Number::Integer(1).is_finite());
    /// assert!(!Number::Float(f64::NAN).is_finite());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float(f) => f.is_finite(),
            _ => true,
        }
    }

    /// Converts this number to an `i64` if it is an integer that fits.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Unsigned(u) => i64::try_from(*u).ok(),
            Number::Big(b) => i64::try_from(b).ok(),
            Number::Float(_) => None,
        }
    }
}

/// Widens an `f32` through its shortest decimal text, so `0.1f32` becomes `0.1`
/// rather than `0.10000000149011612`.
pub(crate) fn widen_f32(value: f32) -> f64 {
    if value.is_finite() {
        value.to_string().parse().unwrap_or(f64::from(value))
    } else {
        f64::from(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Unsigned(u) => write!(f, "{}", u),
            Number::Big(b) => write!(f, "{}", b),
            Number::Float(fl) => {
                let text = fl.to_string();
                if fl.is_finite() && !text.contains('.') {
                    write!(f, "{}.0", text)
                } else {
                    f.write_str(&text)
                }
            }
        }
    }
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Returns `true` if the value is an error record.
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Returns `true` if the value has already been encoded.
    #[inline]
    #[must_use]
    pub const fn is_encoded(&self) -> bool {
        matches!(self, Value::Encoded(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer that fits in `i64`, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a sequence, returns a reference to its elements.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_mapping(&self) -> Option<&LispMap> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// If the value is an error record, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_error(&self) -> Option<&ErrorRecord> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Short name of the value's shape, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Error(_) => "error",
            Value::Opaque(_) => "opaque",
            Value::Encoded(_) => "encoded",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for Value {
    fn from(value: isize) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::Number(Number::Unsigned(value)),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(widen_f32(value)))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::Number(Number::Big(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<LispMap> for Value {
    fn from(value: LispMap) -> Self {
        Value::Mapping(value)
    }
}

impl From<ErrorRecord> for Value {
    fn from(value: ErrorRecord) -> Self {
        Value::Error(value)
    }
}

impl From<EncodedNode> for Value {
    fn from(value: EncodedNode) -> Self {
        Value::Encoded(Box::new(value))
    }
}

/// A calendar date becomes a date mapping keyed by `yyyymmdd`.
impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Mapping(LispMap::date(value))
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Number(Number::Integer(42)));
        assert_eq!(Value::from(3.5f64), Value::Number(Number::Float(3.5)));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_large_unsigned_keeps_precision() {
        assert_eq!(
            Value::from(u64::MAX),
            Value::Number(Number::Unsigned(u64::MAX))
        );
        assert_eq!(Value::from(7u64), Value::Number(Number::Integer(7)));
        assert_eq!(Number::Unsigned(u64::MAX).to_string(), "18446744073709551615");
    }

    #[test]
    fn test_float_display() {
        assert_eq!(Number::Float(0.1).to_string(), "0.1");
        assert_eq!(Number::Float(-2.0).to_string(), "-2.0");
        assert_eq!(Number::Float(1e-7).to_string(), "0.0000001");
        assert!(!Number::Float(f64::INFINITY).is_finite());
    }

    #[test]
    fn test_f32_keeps_its_digits() {
        assert_eq!(Value::from(0.1f32), Value::Number(Number::Float(0.1)));
        assert_eq!(Value::from(16_777_216f32), Value::Number(Number::Float(16_777_216.0)));
        assert!(!widen_f32(f32::NAN).is_finite());
    }

    #[test]
    fn test_big_integer_display() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            Number::Big(big).to_string(),
            "123456789012345678901234567890"
        );
    }

    #[test]
    fn test_from_collections() {
        let value = Value::from(vec![1i32, 2]);
        assert_eq!(
            value,
            Value::Sequence(vec![Value::from(1i32), Value::from(2i32)])
        );

        let collected: Value = vec![Value::Null, Value::from("a")].into_iter().collect();
        assert!(collected.is_sequence());
    }

    #[test]
    fn test_date_conversion() {
        let date = NaiveDate::from_ymd_opt(1949, 10, 1).unwrap();
        let value = Value::from(date);
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get("yyyymmdd"), Some(&Value::from("19491001")));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Opaque("f".into()).kind_name(), "opaque");
        assert_eq!(Value::from(vec![1i32]).kind_name(), "sequence");
    }
}
