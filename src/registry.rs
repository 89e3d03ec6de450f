//! Registry of encoding rules.
//!
//! A [`Registry`] is the ordered dispatch list the encoder walks: rules sorted by
//! descending priority, ties kept in registration order. It is assembled once and is
//! read-only afterwards, so one registry can serve any number of threads.
//!
//! New kinds take part in dispatch by being registered, without touching the
//! registry or the encoder:
//!
//! ```rust
//! use serde_lispify::{Encoder, Form, LispOptions, Registry, Result, Rule, Value};
//!
//! /// Renders opaque host values as symbols instead of failing.
//! #[derive(Debug)]
//! struct OpaqueSymbol;
//!
//! impl Rule for OpaqueSymbol {
//!     fn name(&self) -> &'static str {
//!         "opaque-symbol"
//!     }
//!
//!     fn priority(&self) -> u8 {
//!         0
//!     }
//!
//!     fn accepts(&self, value: &Value) -> bool {
//!         matches!(value, Value::Opaque(_))
//!     }
//!
//!     fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
//!         let name = match value {
//!             Value::Opaque(name) => name.as_str(),
//!             _ => "unknown",
//!         };
//!         Ok(Form::atom(name))
//!     }
//! }
//!
//! let registry = Registry::builder()
//!     .with_standard_rules(&LispOptions::default())
//!     .register(OpaqueSymbol)
//!     .unwrap()
//!     .build();
//! assert_eq!(registry.names().last(), Some(&"opaque-symbol"));
//!
//! let encoder = Encoder::new(registry);
//! let node = encoder.encode(Value::Opaque("identity".to_string())).unwrap();
//! assert_eq!(node.to_text(), "identity");
//! ```

use crate::rule::{is_valid_priority, Rule};
use crate::rules::standard_rules;
use crate::{Error, LispOptions, Result, Value};
use std::fmt;
use std::sync::Arc;

/// An ordered, read-only set of encoding rules.
#[derive(Clone)]
pub struct Registry {
    rules: Vec<Arc<dyn Rule>>,
}

impl Registry {
    /// Starts an empty registry.
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The standard rule set configured by `options`.
    #[must_use]
    pub fn standard(options: &LispOptions) -> Self {
        RegistryBuilder::new().with_standard_rules(options).build()
    }

    /// Rules in dispatch order, highest priority first.
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    /// Rule names in dispatch order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::{LispOptions, Registry};
    ///
    /// let registry = Registry::standard(&LispOptions::default());
    /// assert_eq!(registry.names().first(), Some(&"error"));
    /// assert_eq!(registry.names().last(), Some(&"text"));
    /// ```
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The first rule, in dispatch order, that accepts `value`.
    #[must_use]
    pub fn find(&self, value: &Value) -> Option<&Arc<dyn Rule>> {
        self.rules.iter().find(|r| r.accepts(value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard(&LispOptions::default())
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("rules", &self.names())
            .finish()
    }
}

/// Collects rules for a [`Registry`].
///
/// Registration order is the tie-break between rules of equal priority.
#[derive(Default)]
pub struct RegistryBuilder {
    rules: Vec<Arc<dyn Rule>>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder { rules: Vec::new() }
    }

    /// Adds the standard rules configured by `options`.
    #[must_use]
    pub fn with_standard_rules(mut self, options: &LispOptions) -> Self {
        self.rules.extend(standard_rules(options));
        self
    }

    /// Adds a rule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPriority`] when the rule's priority is above 15.
    pub fn register<R>(self, rule: R) -> Result<Self>
    where
        R: Rule + 'static,
    {
        self.register_shared(Arc::new(rule))
    }

    /// Adds a rule that is already behind an `Arc`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPriority`] when the rule's priority is above 15.
    pub fn register_shared(mut self, rule: Arc<dyn Rule>) -> Result<Self> {
        if !is_valid_priority(rule.priority()) {
            tracing::warn!(
                rule = rule.name(),
                priority = rule.priority(),
                "rejecting rule with out-of-range priority"
            );
            return Err(Error::invalid_priority(rule.name(), rule.priority()));
        }
        self.rules.push(rule);
        Ok(self)
    }

    /// Sorts the rules by descending priority and freezes them.
    #[must_use]
    pub fn build(mut self) -> Registry {
        // stable: equal priorities keep registration order
        self.rules.sort_by(|a, b| b.priority().cmp(&a.priority()));
        let registry = Registry { rules: self.rules };
        tracing::debug!(
            rules = registry.len(),
            order = ?registry.names(),
            "built rule registry"
        );
        registry
    }
}
