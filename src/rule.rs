//! The encoding rule interface.
//!
//! A [`Rule`] handles one encodable kind. It has a fixed priority, a predicate that
//! decides whether it accepts a value, and a transform that turns an accepted value
//! into a [`Form`]. The [`Registry`](crate::Registry) orders rules by priority and the
//! [`Encoder`](crate::Encoder) asks them in that order, so the first rule that accepts
//! a value is the one that encodes it.
//!
//! ## Writing a rule
//!
//! ```rust
//! use serde_lispify::{Encoder, Form, Registry, Result, Rule, Value};
//!
//! /// Encodes negative integers as `(- n)`.
//! #[derive(Debug)]
//! struct Negation;
//!
//! impl Rule for Negation {
//!     fn name(&self) -> &'static str {
//!         "negation"
//!     }
//!
//!     fn priority(&self) -> u8 {
//!         15
//!     }
//!
//!     fn accepts(&self, value: &Value) -> bool {
//!         value.as_i64().is_some_and(|n| n < 0)
//!     }
//!
//!     fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
//!         let n = value.as_i64().unwrap_or_default();
//!         Ok(Form::list(vec![Form::atom("-"), Form::atom((-n).to_string())]))
//!     }
//! }
//!
//! let registry = Registry::builder()
//!     .register(Negation)
//!     .unwrap()
//!     .with_standard_rules(&Default::default())
//!     .build();
//! let encoder = Encoder::new(registry);
//! assert_eq!(encoder.encode(vec![-3, 4]).unwrap().to_text(), "((- 3) 4)");
//! ```

use crate::{Encoder, Result, Value};
use std::fmt;

/// Lowest rule priority.
pub const MIN_PRIORITY: u8 = 0;

/// Highest rule priority, used by the literal kinds and error records.
pub const MAX_PRIORITY: u8 = 15;

/// Returns `true` if `priority` lies in `MIN_PRIORITY..=MAX_PRIORITY`.
#[inline]
#[must_use]
pub const fn is_valid_priority(priority: u8) -> bool {
    priority <= MAX_PRIORITY
}

/// An encoding rule for one kind of value.
///
/// Rules are stateless apart from their configuration, and must be safe to share
/// between threads: the process-wide registry hands the same instances to every
/// caller.
pub trait Rule: Send + Sync + fmt::Debug {
    /// Name of the encodable kind, reported by [`EncodedNode::kind`](crate::EncodedNode::kind).
    fn name(&self) -> &'static str;

    /// Dispatch priority in `0..=15`. Higher priorities are tried first.
    fn priority(&self) -> u8;

    /// Whether the rule renders a bare token that is never parenthesized by itself.
    fn is_literal(&self) -> bool {
        false
    }

    /// Whether nodes produced by this rule test as failure in boolean context.
    fn is_falsy(&self) -> bool {
        false
    }

    /// Decides whether this rule encodes `value`. Must not fail on foreign shapes.
    fn accepts(&self, value: &Value) -> bool;

    /// Turns an accepted value into its form. Nested values are encoded through
    /// `encoder`, so the same rule set applies at every depth.
    fn transform(&self, value: &Value, encoder: &Encoder) -> Result<Form>;
}

/// The rendered shape of an encoded value.
///
/// Atoms are written verbatim; lists are written as their items separated by single
/// spaces and wrapped in parentheses.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::Form;
///
/// let form = Form::list(vec![Form::atom(":a"), Form::atom("1"), Form::list(vec![])]);
/// assert_eq!(form.to_string(), "(:a 1 ())");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form {
    Atom(String),
    List(Vec<Form>),
}

impl Form {
    #[must_use]
    pub fn atom(text: impl Into<String>) -> Self {
        Form::Atom(text.into())
    }

    #[must_use]
    pub fn list(items: Vec<Form>) -> Self {
        Form::List(items)
    }

    /// If the form is a list, returns its items.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Form]> {
        match self {
            Form::List(items) => Some(items),
            Form::Atom(_) => None,
        }
    }

    /// Appends the rendered form to `output`.
    pub fn write_to(&self, output: &mut String) {
        match self {
            Form::Atom(text) => output.push_str(text),
            Form::List(items) => {
                output.push('(');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        output.push(' ');
                    }
                    item.write_to(output);
                }
                output.push(')');
            }
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();
        self.write_to(&mut output);
        f.write_str(&output)
    }
}
