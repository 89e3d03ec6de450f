//! Configuration options for the standard rule set.
//!
//! Options are consumed once, when a [`Registry`](crate::Registry) is built. After that
//! the rule set is read-only, so changing options means building a new encoder.
//!
//! ## Examples
//!
//! ```rust
//! use serde_lispify::{to_string_with_options, LispOptions};
//! use std::collections::BTreeMap;
//!
//! let mut release = BTreeMap::new();
//! release.insert("released", "20240115");
//! release.insert("title", "Dune");
//!
//! let options = LispOptions::new().with_date_key("released");
//! let lisp = to_string_with_options(&release, options).unwrap();
//! assert_eq!(lisp, "(:released 20240115 :title \"Dune\")");
//! ```

use crate::map::DATE_KEY;

/// Configuration options for the standard rules.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::LispOptions;
///
/// let options = LispOptions::new();
/// assert_eq!(options.date_keys, vec!["yyyymmdd".to_string()]);
/// assert!(!options.escape_backslashes);
///
/// let options = LispOptions::new()
///     .with_date_keys(["iso8601", "yyyymmdd"])
///     .with_backslash_escapes(true);
/// assert_eq!(options.date_keys.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LispOptions {
    /// Mapping keys whose values are emitted verbatim. A mapping holding any of
    /// them is encoded by the date rule.
    pub date_keys: Vec<String>,
    /// Escape `\` as `\\` inside strings. Off by default: only `"` is escaped.
    pub escape_backslashes: bool,
}

impl Default for LispOptions {
    fn default() -> Self {
        LispOptions {
            date_keys: vec![DATE_KEY.to_string()],
            escape_backslashes: false,
        }
    }
}

impl LispOptions {
    /// Creates default options (`yyyymmdd` date key, quote-only escaping).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a reserved date key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::LispOptions;
    ///
    /// let options = LispOptions::new().with_date_key("ddmmyyyy");
    /// assert_eq!(options.date_keys, vec!["yyyymmdd", "ddmmyyyy"]);
    /// ```
    #[must_use]
    pub fn with_date_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        if !self.date_keys.contains(&key) {
            self.date_keys.push(key);
        }
        self
    }

    /// Replaces the reserved date keys. An empty set disables the date rule.
    #[must_use]
    pub fn with_date_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.date_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether backslashes inside strings are escaped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::{Encoder, LispOptions};
    ///
    /// let encoder = Encoder::with_options(LispOptions::new().with_backslash_escapes(true));
    /// assert_eq!(encoder.encode("a\\b").unwrap().to_text(), "\"a\\\\b\"");
    /// ```
    #[must_use]
    pub fn with_backslash_escapes(mut self, escape: bool) -> Self {
        self.escape_backslashes = escape;
        self
    }
}
