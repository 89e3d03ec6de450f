//! Error types for Lisp encoding.
//!
//! The encoder is total over the value shapes it documents and fails explicitly
//! outside them. Everything that can go wrong surfaces as an [`Error`]:
//!
//! - **Unimplemented kinds**: no registered rule accepts the value
//! - **Invalid priorities**: a custom rule was registered outside `0..=15`
//! - **Invalid keys**: a mapping key that is neither a string nor null
//! - **I/O errors**: writing the notation to a writer failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_lispify::{encode, Error, Value};
//!
//! let result = encode(Value::Opaque("<function>".to_string()));
//! assert!(matches!(result, Err(Error::UnimplementedKind(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while encoding a value.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// No encoding rule accepts the value
    #[error("Unimplemented kind: no encoding rule accepts {0}")]
    UnimplementedKind(String),

    /// A rule was registered with a priority outside the allowed range
    #[error("Invalid priority {priority} for rule `{rule}`: priorities range from {min} to {max}", min = crate::rule::MIN_PRIORITY, max = crate::rule::MAX_PRIORITY)]
    InvalidPriority { rule: String, priority: u8 },

    /// Mapping key that is neither a string nor null
    #[error("Invalid mapping key {0}: keys must be strings or null")]
    InvalidKey(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unimplemented-kind error carrying the value's diagnostic text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::Error;
    ///
    /// let err = Error::unimplemented_kind("Opaque(\"<function>\")");
    /// assert!(err.is_unimplemented_kind());
    /// assert!(err.to_string().contains("<function>"));
    /// ```
    pub fn unimplemented_kind(repr: &str) -> Self {
        Error::UnimplementedKind(repr.to_string())
    }

    /// Creates an invalid priority error for a rule registration.
    pub fn invalid_priority(rule: &str, priority: u8) -> Self {
        Error::InvalidPriority {
            rule: rule.to_string(),
            priority,
        }
    }

    /// Creates an invalid key error for a mapping key that is not a string or null.
    pub fn invalid_key(repr: &str) -> Self {
        Error::InvalidKey(repr.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` if no encoding rule accepted the value.
    #[must_use]
    pub const fn is_unimplemented_kind(&self) -> bool {
        matches!(self, Error::UnimplementedKind(_))
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_priority_message() {
        let err = Error::invalid_priority("roman-numeral", 16);
        let msg = err.to_string();
        assert!(msg.contains("roman-numeral"));
        assert!(msg.contains("16"));
        assert!(msg.contains("0 to 15"));
    }

    #[test]
    fn test_is_unimplemented_kind() {
        assert!(Error::unimplemented_kind("x").is_unimplemented_kind());
        assert!(!Error::invalid_key("1").is_unimplemented_kind());
        assert!(!Error::io("broken pipe").is_unimplemented_kind());
    }
}
