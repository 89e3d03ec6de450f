//! # serde_lispify
//!
//! Encode Rust values as s-expressions a Common Lisp reader understands.
//!
//! ## What does it produce?
//!
//! Strings become quoted strings, sequences become lists, mappings become sorted
//! keyword plists, booleans and null become `t`/`nil`, and errors become
//! `(:error symbol ...)` records:
//!
//! ```rust
//! use serde_lispify::encode;
//!
//! assert_eq!(encode("foo").unwrap().to_text(), "\"foo\"");
//! assert_eq!(encode(vec!["a", "b"]).unwrap().to_text(), "(\"a\" \"b\")");
//! assert_eq!(encode(true).unwrap().to_text(), "t");
//! assert_eq!(encode(":feminine").unwrap().to_text(), ":feminine");
//! ```
//!
//! ## Key Features
//!
//! - **Rule Dispatch**: Each kind of value is handled by a prioritized [`Rule`]; new
//!   kinds are added by registering rules, not by editing a central switch
//! - **Deterministic**: Plists are sorted, so equal mappings always encode identically
//! - **Idempotent**: Encoding an already-encoded node returns it unchanged
//! - **Serde Compatible**: Anything implementing `Serialize` can be encoded
//! - **Falsy Errors**: Encoded errors report [`EncodedNode::is_falsy`] so callers can
//!   branch on "answer or failure"
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_lispify::to_string;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     gender: String,
//!     spouse: Option<String>,
//! }
//!
//! let person = Person {
//!     name: "Ada Lovelace".to_string(),
//!     gender: ":feminine".to_string(),
//!     spouse: None,
//! };
//!
//! assert_eq!(
//!     to_string(&person).unwrap(),
//!     "(:gender :feminine :name \"Ada Lovelace\")"
//! );
//! ```
//!
//! ### Errors as Answers
//!
//! ```rust
//! use serde_lispify::{encode, ErrorRecord};
//!
//! let answer = encode(ErrorRecord::new("ValueError").with_message("Wrong thing")).unwrap();
//! assert_eq!(answer.to_text(), "(:error value-error :message \"Wrong thing\")");
//! assert!(answer.is_falsy());
//! ```
//!
//! ## Notation
//!
//! See the [`notation`] module for the complete description of the output.

pub mod encoder;
pub mod error;
pub mod error_record;
pub mod macros;
pub mod map;
pub mod naming;
pub mod notation;
pub mod options;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod ser;
pub mod value;

pub use encoder::{EncodedNode, Encoder};
pub use error::{Error, Result};
pub use error_record::ErrorRecord;
pub use map::LispMap;
pub use options::LispOptions;
pub use registry::{Registry, RegistryBuilder};
pub use rule::{Form, Rule};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Encode a value with the process-wide standard rules.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::{encode, LispMap};
///
/// let mut map = LispMap::new();
/// map.insert("b", "foo");
/// map.insert("a", 1);
/// assert_eq!(encode(map).unwrap().to_text(), "(:a 1 :b \"foo\")");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnimplementedKind`] if no rule accepts the value or a value nested
/// in it.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(value: impl Into<Value>) -> Result<EncodedNode> {
    Encoder::global().encode(value)
}

/// Convert any `T: Serialize` to a `Value`.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if a mapping key is neither a string nor null.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to its Lisp notation.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::to_string;
///
/// assert_eq!(to_string(&vec![Some(1), None]).unwrap(), "(1 nil)");
/// ```
///
/// # Errors
///
/// Returns an error if a mapping key is invalid or a value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Ok(encode(to_value(value)?)?.to_text())
}

/// Serialize any `T: Serialize` to its Lisp notation, using the standard rules
/// configured by `options`.
///
/// # Errors
///
/// Returns an error if a mapping key is invalid or a value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: LispOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let encoder = Encoder::with_options(options);
    Ok(encoder.encode(to_value(value)?)?.to_text())
}

/// Serialize any `T: Serialize` to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &("a", 1)).unwrap();
/// assert_eq!(buffer, b"(\"a\" 1)");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let lisp = to_string(value)?;
    writer
        .write_all(lisp.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
