//! The encoder driver and its result type.
//!
//! [`Encoder::encode`] walks the registry's dispatch list, lets the first rule that
//! accepts the value transform it, and wraps the result in an [`EncodedNode`].
//! Composite rules call back into the same encoder for their children, so a whole
//! tree is encoded with one rule set.
//!
//! ## Laws
//!
//! - **Idempotence**: encoding an [`EncodedNode`] returns it unchanged.
//! - **Determinism**: the same value and rule set always give the same text,
//!   whatever the insertion order of the mappings involved.
//!
//! ```rust
//! use serde_lispify::{encode, Value};
//!
//! let once = encode(vec!["a", "b"]).unwrap();
//! let twice = encode(Value::from(once.clone())).unwrap();
//! assert_eq!(once, twice);
//! assert_eq!(twice, "(\"a\" \"b\")");
//! ```

use crate::rule::{Form, Rule};
use crate::rules::SequenceRule;
use crate::{Error, LispOptions, Registry, Result, Value};
use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Encoder> = OnceLock::new();

/// Encodes values with a fixed set of rules.
///
/// Cloning is cheap: clones share the same registry.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    registry: Arc<Registry>,
}

impl Encoder {
    #[must_use]
    pub fn new(registry: Registry) -> Self {
        Encoder {
            registry: Arc::new(registry),
        }
    }

    /// An encoder over the standard rules configured by `options`.
    #[must_use]
    pub fn with_options(options: LispOptions) -> Self {
        Encoder::new(Registry::standard(&options))
    }

    /// The process-wide encoder over the default standard rules.
    ///
    /// It is built on first use and never changes afterwards.
    pub fn global() -> &'static Encoder {
        GLOBAL.get_or_init(Encoder::default)
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Encodes anything convertible into a [`Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedKind`] when no rule accepts the value or one of
    /// the values nested in it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::Encoder;
    ///
    /// let encoder = Encoder::default();
    /// assert_eq!(encoder.encode(5).unwrap().to_text(), "5");
    /// assert_eq!(encoder.encode(":feminine").unwrap().to_text(), ":feminine");
    /// ```
    pub fn encode(&self, value: impl Into<Value>) -> Result<EncodedNode> {
        self.encode_value(&value.into())
    }

    /// Encodes a borrowed [`Value`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedKind`] when no rule accepts the value or one of
    /// the values nested in it.
    pub fn encode_value(&self, value: &Value) -> Result<EncodedNode> {
        if let Value::Encoded(node) = value {
            return Ok((**node).clone());
        }

        let rule = match self.registry.find(value) {
            Some(rule) => rule,
            None => {
                tracing::debug!(kind = value.kind_name(), "no rule accepts value");
                return Err(Error::unimplemented_kind(&format!("{:?}", value)));
            }
        };

        tracing::trace!(rule = rule.name(), kind = value.kind_name(), "encoding value");
        let form = rule.transform(value, self)?;
        Ok(EncodedNode {
            original: value.clone(),
            rule: Arc::clone(rule),
            form,
            encoder: self.clone(),
        })
    }

    /// Whether the sequence `node` has a member that encodes to the same text as
    /// `value`. See [`EncodedNode::contains`].
    pub fn contains(&self, node: &EncodedNode, value: impl Into<Value>) -> bool {
        if node.kind() != SequenceRule::NAME {
            return false;
        }
        let Some(items) = node.form.as_list() else {
            return false;
        };
        match self.encode(value) {
            Ok(candidate) => {
                let text = candidate.to_text();
                items.iter().any(|item| item.to_string() == text)
            }
            Err(_) => false,
        }
    }
}

/// The immutable result of encoding one value.
///
/// The text is rendered on demand from the node's [`Form`]. Two nodes are equal when
/// they render to the same text, and a node equals a string holding its text.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::{encode, ErrorRecord};
///
/// let answer = encode(true).unwrap();
/// assert_eq!(answer.to_text(), "t");
/// assert!(answer.is_literal());
/// assert!(answer.is_truthy());
///
/// let failure = encode(ErrorRecord::new("ValueError")).unwrap();
/// assert_eq!(failure, "(:error value-error)");
/// assert!(failure.is_falsy());
/// ```
#[derive(Clone)]
pub struct EncodedNode {
    original: Value,
    rule: Arc<dyn Rule>,
    form: Form,
    encoder: Encoder,
}

impl EncodedNode {
    /// Renders the notation.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        self.form.write_to(&mut output);
        output
    }

    /// Name of the rule that produced this node.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.rule.name()
    }

    /// The value as it was given to the encoder.
    #[must_use]
    pub fn original(&self) -> &Value {
        &self.original
    }

    #[must_use]
    pub fn form(&self) -> &Form {
        &self.form
    }

    #[must_use]
    pub fn into_form(self) -> Form {
        self.form
    }

    /// `true` only for encoded errors.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        self.rule.is_falsy()
    }

    #[must_use]
    pub fn is_truthy(&self) -> bool {
        !self.is_falsy()
    }

    /// `true` for bare tokens: booleans, null, numbers and keywords.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        self.rule.is_literal()
    }

    /// Whether this sequence has a member that encodes to the same text as `value`.
    ///
    /// Membership compares encoded text, so a string never matches a number with
    /// the same digits. Nodes of other kinds have no members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_lispify::encode;
    ///
    /// let list = encode(vec!["1", "3"]).unwrap();
    /// assert!(list.contains("1"));
    /// assert!(!list.contains(1));
    /// ```
    pub fn contains(&self, value: impl Into<Value>) -> bool {
        self.encoder.contains(self, value)
    }
}

impl fmt::Display for EncodedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl fmt::Debug for EncodedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object {}>", self.kind(), self.to_text())
    }
}

impl PartialEq for EncodedNode {
    fn eq(&self, other: &Self) -> bool {
        self.to_text() == other.to_text()
    }
}

impl Eq for EncodedNode {}

impl PartialEq<str> for EncodedNode {
    fn eq(&self, other: &str) -> bool {
        self.to_text() == other
    }
}

impl PartialEq<&str> for EncodedNode {
    fn eq(&self, other: &&str) -> bool {
        self.to_text() == *other
    }
}

impl PartialEq<String> for EncodedNode {
    fn eq(&self, other: &String) -> bool {
        self.to_text() == *other
    }
}

impl Hash for EncodedNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_text().hash(state);
    }
}

/// Serializes as the notation string.
impl Serialize for EncodedNode {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorRecord, LispMap};
    use std::collections::HashSet;

    #[test]
    fn test_idempotence() {
        let encoder = Encoder::default();
        let node = encoder.encode(vec![1, 2]).unwrap();
        let again = encoder.encode(node.clone()).unwrap();
        assert_eq!(node, again);
        assert_eq!(again.kind(), "sequence");
    }

    #[test]
    fn test_encoded_children_pass_through() {
        let encoder = Encoder::default();
        let inner = encoder.encode(":kw").unwrap();
        let outer = encoder
            .encode(Value::Sequence(vec![Value::from(inner), Value::from("x")]))
            .unwrap();
        assert_eq!(outer.to_text(), "(:kw \"x\")");
    }

    #[test]
    fn test_unimplemented_kind() {
        let err = Encoder::default()
            .encode(Value::Opaque("<function <lambda>>".to_string()))
            .unwrap_err();
        assert!(err.is_unimplemented_kind());
        assert!(err.to_string().contains("<lambda>"));
    }

    #[test]
    fn test_nested_unimplemented_kind_propagates() {
        let value = Value::Sequence(vec![Value::from(1), Value::Opaque("f".to_string())]);
        assert!(Encoder::default()
            .encode(value)
            .unwrap_err()
            .is_unimplemented_kind());
    }

    #[test]
    fn test_empty_registry_encodes_nothing() {
        let encoder = Encoder::new(Registry::builder().build());
        assert!(encoder.encode(1).unwrap_err().is_unimplemented_kind());
    }

    #[test]
    fn test_equality_with_strings() {
        let node = Encoder::default().encode("foo").unwrap();
        assert_eq!(node, "\"foo\"");
        assert_eq!(node, "\"foo\"".to_string());
        assert!(node != "foo");
    }

    #[test]
    fn test_hash_by_text() {
        let encoder = Encoder::default();
        let mut set = HashSet::new();
        set.insert(encoder.encode(false).unwrap());
        set.insert(encoder.encode(Value::Null).unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_truthiness() {
        let encoder = Encoder::default();
        assert!(encoder.encode(false).unwrap().is_truthy());
        assert!(encoder.encode(Value::Null).unwrap().is_truthy());
        assert!(encoder
            .encode(ErrorRecord::new("ValueError"))
            .unwrap()
            .is_falsy());
    }

    #[test]
    fn test_contains_only_for_sequences() {
        let encoder = Encoder::default();
        let mut map = LispMap::new();
        map.insert("a", 1);
        let node = encoder.encode(map).unwrap();
        assert!(!node.contains(1));
        assert!(!encoder.encode("a").unwrap().contains("a"));
    }

    #[test]
    fn test_contains_unencodable_candidate() {
        let list = Encoder::default().encode(vec![1]).unwrap();
        assert!(!list.contains(Value::Opaque("f".to_string())));
    }

    #[test]
    fn test_debug_format() {
        let node = Encoder::default().encode("foo").unwrap();
        assert_eq!(format!("{:?}", node), "<text object \"foo\">");
    }

    #[test]
    fn test_global_encoder_is_shared() {
        assert!(std::ptr::eq(Encoder::global(), Encoder::global()));
        assert_eq!(Encoder::global().registry().len(), 9);
    }
}
