//! Error records: exceptions as plain data.
//!
//! An [`ErrorRecord`] is what the error rule encodes. It names the error's type,
//! optionally carries a primary message, and holds a bag of diagnostic attributes
//! such as a user-facing `reply`.
//!
//! ```rust
//! use serde_lispify::{encode, ErrorRecord};
//!
//! let err = ErrorRecord::new("ResourceNotFound")
//!     .with_message("no such page")
//!     .with_attribute("reply", "I don't know that page.");
//!
//! let encoded = encode(err).unwrap();
//! assert_eq!(
//!     encoded.to_text(),
//!     "(:error resource-not-found :message \"no such page\" :reply \"I don't know that page.\")"
//! );
//! assert!(encoded.is_falsy());
//! ```

use crate::naming::{camel_case_to_lisp_name, short_type_name};
use crate::{LispMap, Value};

/// Attribute key the primary message is rendered under.
pub const MESSAGE_KEY: &str = "message";

/// A raised error described as data.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorRecord {
    type_name: String,
    message: Option<String>,
    attributes: LispMap,
}

impl ErrorRecord {
    /// Creates a record for an error type with no message and no attributes.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        ErrorRecord {
            type_name: type_name.into(),
            message: None,
            attributes: LispMap::new(),
        }
    }

    /// Builds a record from a Rust error value.
    ///
    /// The type name is the last path segment of `E`'s type name and the message is
    /// the error's `Display` text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::{encode, ErrorRecord};
    ///
    /// let err = "x".parse::<i32>().unwrap_err();
    /// let record = ErrorRecord::from_error(&err);
    /// assert_eq!(record.type_name(), "ParseIntError");
    /// assert_eq!(
    ///     encode(record).unwrap().to_text(),
    ///     "(:error parse-int-error :message \"invalid digit found in string\")"
    /// );
    /// ```
    #[must_use]
    pub fn from_error<E>(err: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        ErrorRecord::new(short_type_name(std::any::type_name::<E>())).with_message(err.to_string())
    }

    /// Sets the primary message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a diagnostic attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key, value);
        self
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn attributes(&self) -> &LispMap {
        &self.attributes
    }

    /// The Lisp symbol naming this error, e.g. `value-error` for `ValueError`.
    #[must_use]
    pub fn symbol(&self) -> String {
        camel_case_to_lisp_name(&self.type_name)
    }

    /// Attributes plus the primary message under `message`.
    ///
    /// An empty message counts as no message. The primary message replaces an
    /// attribute that is also called `message`.
    #[must_use]
    pub fn fields(&self) -> LispMap {
        let mut fields = self.attributes.clone();
        if let Some(message) = self.message.as_deref().filter(|m| !m.is_empty()) {
            fields.insert(MESSAGE_KEY, message);
        }
        fields
    }
}
