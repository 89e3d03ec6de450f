//! The standard encoding rules.
//!
//! | Rule | Accepts | Priority | Output |
//! |------|---------|----------|--------|
//! | [`ErrorRule`] | error records | 15 | `(:error symbol :key value ...)` |
//! | [`KeywordRule`] | strings like `:name` with no space | 15 | `:name` |
//! | [`BoolRule`] | booleans | 15 | `t` / `nil` |
//! | [`NullRule`] | null | 15 | `nil` |
//! | [`NumberRule`] | finite numbers | 15 | `42`, `2.5` |
//! | [`DateMappingRule`] | mappings holding a date key | 4 | `(:html "..." :yyyymmdd 19491001)` |
//! | [`MappingRule`] | mappings | 3 | `(:a 1 :b "foo")` |
//! | [`SequenceRule`] | sequences | 2 | `("a" "b")` |
//! | [`TextRule`] | strings | 1 | `"foo \"bar\""` |
//!
//! Priorities are part of the contract. A keyword-looking string is accepted by both
//! the keyword and the text rule; the keyword rule wins because it ranks higher. A date
//! mapping is also a mapping; the date rule wins for the same reason.

use crate::rule::{is_valid_priority, Form, Rule, MAX_PRIORITY};
use crate::{Encoder, Error, LispMap, LispOptions, Result, Value};
use std::sync::Arc;

pub const TEXT_PRIORITY: u8 = 1;
pub const SEQUENCE_PRIORITY: u8 = 2;
pub const MAPPING_PRIORITY: u8 = 3;
pub const DATE_MAPPING_PRIORITY: u8 = 4;
pub const LITERAL_PRIORITY: u8 = MAX_PRIORITY;

const _: () = assert!(
    is_valid_priority(TEXT_PRIORITY)
        && is_valid_priority(SEQUENCE_PRIORITY)
        && is_valid_priority(MAPPING_PRIORITY)
        && is_valid_priority(DATE_MAPPING_PRIORITY)
        && is_valid_priority(LITERAL_PRIORITY)
);

/// The standard rules configured by `options`, in declaration order.
///
/// Rules sharing a priority keep this order in the registry.
#[must_use]
pub fn standard_rules(options: &LispOptions) -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(ErrorRule),
        Arc::new(KeywordRule),
        Arc::new(BoolRule),
        Arc::new(NullRule),
        Arc::new(NumberRule),
        Arc::new(DateMappingRule::new(options.date_keys.clone())),
        Arc::new(MappingRule),
        Arc::new(SequenceRule),
        Arc::new(TextRule::new(options.escape_backslashes)),
    ]
}

fn rejected(rule: &dyn Rule, value: &Value) -> Error {
    Error::unimplemented_kind(&format!("{:?} (passed to the {} rule)", value, rule.name()))
}

/// Quotes `s` for the Lisp reader.
///
/// Only `"` is escaped unless `escape_backslashes` is set. Every other character,
/// including non-ASCII text, passes through unchanged.
///
/// # Examples
///
/// ```rust
/// use serde_lispify::rules::quote;
///
/// assert_eq!(quote("say \"hi\"", false), "\"say \\\"hi\\\"\"");
/// assert_eq!(quote("a\\b", false), "\"a\\b\"");
/// assert_eq!(quote("a\\b", true), "\"a\\\\b\"");
/// ```
#[must_use]
pub fn quote(s: &str, escape_backslashes: bool) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for ch in s.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' if escape_backslashes => quoted.push_str("\\\\"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}

/// Builds the contents of a plist (without parentheses) from a mapping.
///
/// Entries are sorted by key and entries whose value is null are dropped. A null key
/// contributes its value alone; a text key contributes `:key value`. Values under
/// `verbatim_keys` are written as they are instead of being encoded.
fn plist(map: &LispMap, encoder: &Encoder, verbatim_keys: &[String]) -> Result<Vec<Form>> {
    let mut forms = Vec::with_capacity(map.len() * 2);
    for (key, value) in map.sorted_entries() {
        if value.is_null() {
            continue;
        }

        let form = match key {
            Some(k) if verbatim_keys.iter().any(|v| v == k) => verbatim(value, encoder)?,
            _ => encoder.encode_value(value)?.into_form(),
        };

        if let Some(k) = key {
            forms.push(Form::Atom(format!(":{}", k)));
        }
        forms.push(form);
    }
    Ok(forms)
}

// Strings go out unquoted; anything else has no raw text form and is encoded.
fn verbatim(value: &Value, encoder: &Encoder) -> Result<Form> {
    match value {
        Value::String(s) => Ok(Form::atom(s.as_str())),
        other => Ok(encoder.encode_value(other)?.into_form()),
    }
}

/// Encodes strings as double-quoted Lisp strings.
#[derive(Debug, Clone, Default)]
pub struct TextRule {
    escape_backslashes: bool,
}

impl TextRule {
    pub const NAME: &'static str = "text";

    #[must_use]
    pub fn new(escape_backslashes: bool) -> Self {
        TextRule { escape_backslashes }
    }
}

impl Rule for TextRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        TEXT_PRIORITY
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_string()
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::String(s) => Ok(Form::Atom(quote(s, self.escape_backslashes))),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes sequences as parenthesized lists, preserving element order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequenceRule;

impl SequenceRule {
    pub const NAME: &'static str = "sequence";
}

impl Rule for SequenceRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        SEQUENCE_PRIORITY
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_sequence()
    }

    fn transform(&self, value: &Value, encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Sequence(items) => {
                let forms = items
                    .iter()
                    .map(|item| encoder.encode_value(item).map(|node| node.into_form()))
                    .collect::<Result<Vec<_>>>()?;
                Ok(Form::List(forms))
            }
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes mappings as sorted plists with null values dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingRule;

impl MappingRule {
    pub const NAME: &'static str = "mapping";
}

impl Rule for MappingRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        MAPPING_PRIORITY
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_mapping()
    }

    fn transform(&self, value: &Value, encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Mapping(map) => Ok(Form::List(plist(map, encoder, &[])?)),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes mappings that carry a reserved date key.
///
/// Values under the reserved keys are emitted verbatim: the caller has already
/// formatted the date, so `"19491001"` goes out as `19491001`. The other keys of the
/// mapping are encoded as usual.
#[derive(Debug, Clone)]
pub struct DateMappingRule {
    keys: Vec<String>,
}

impl DateMappingRule {
    pub const NAME: &'static str = "date-mapping";

    #[must_use]
    pub fn new(keys: Vec<String>) -> Self {
        DateMappingRule { keys }
    }

    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Default for DateMappingRule {
    fn default() -> Self {
        DateMappingRule::new(LispOptions::default().date_keys)
    }
}

impl Rule for DateMappingRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        DATE_MAPPING_PRIORITY
    }

    fn accepts(&self, value: &Value) -> bool {
        match value {
            Value::Mapping(map) => self.keys.iter().any(|k| map.contains_key(k)),
            _ => false,
        }
    }

    fn transform(&self, value: &Value, encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Mapping(map) => Ok(Form::List(plist(map, encoder, &self.keys)?)),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes error records as `(:error symbol plist)`.
///
/// Encoded errors are falsy, so callers can test an answer with
/// `if node.is_truthy() { ... }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorRule;

impl ErrorRule {
    pub const NAME: &'static str = "error";
}

impl Rule for ErrorRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        LITERAL_PRIORITY
    }

    fn is_falsy(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_error()
    }

    fn transform(&self, value: &Value, encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Error(record) => {
                let mut forms = vec![Form::atom(":error"), Form::Atom(record.symbol())];
                forms.extend(plist(&record.fields(), encoder, &[])?);
                Ok(Form::List(forms))
            }
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes keyword strings (`:feminine`) as bare keywords.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRule;

impl KeywordRule {
    pub const NAME: &'static str = "keyword";
}

impl Rule for KeywordRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        LITERAL_PRIORITY
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        value
            .as_str()
            .is_some_and(|s| s.starts_with(':') && !s.contains(' '))
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::String(s) => Ok(Form::atom(s.as_str())),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes booleans as `t` and `nil`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolRule;

impl BoolRule {
    pub const NAME: &'static str = "bool";
}

impl Rule for BoolRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        LITERAL_PRIORITY
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_bool()
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Bool(b) => Ok(Form::atom(if *b { "t" } else { "nil" })),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes null as `nil`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRule;

impl NullRule {
    pub const NAME: &'static str = "null";
}

impl Rule for NullRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        LITERAL_PRIORITY
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        value.is_null()
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Null => Ok(Form::atom("nil")),
            _ => Err(rejected(self, value)),
        }
    }
}

/// Encodes finite numbers in plain decimal notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberRule;

impl NumberRule {
    pub const NAME: &'static str = "number";
}

impl Rule for NumberRule {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn priority(&self) -> u8 {
        LITERAL_PRIORITY
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Number(n) if n.is_finite())
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Number(n) => Ok(Form::Atom(n.to_string())),
            _ => Err(rejected(self, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorRecord, Number};

    fn encoder() -> Encoder {
        Encoder::default()
    }

    #[test]
    fn test_standard_declaration_order() {
        let names: Vec<_> = standard_rules(&LispOptions::default())
            .iter()
            .map(|r| r.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "error",
                "keyword",
                "bool",
                "null",
                "number",
                "date-mapping",
                "mapping",
                "sequence",
                "text"
            ]
        );
    }

    #[test]
    fn test_keyword_and_text_overlap() {
        let value = Value::from(":feminine");
        assert!(KeywordRule.accepts(&value));
        assert!(TextRule::default().accepts(&value));
        assert!(KeywordRule.priority() > TextRule::default().priority());

        assert!(!KeywordRule.accepts(&Value::from(":not a keyword")));
        assert!(!KeywordRule.accepts(&Value::from("feminine")));
    }

    #[test]
    fn test_date_rule_outranks_mapping_rule() {
        let mut map = LispMap::new();
        map.insert("yyyymmdd", "19491001");
        let value = Value::from(map);
        assert!(DateMappingRule::default().accepts(&value));
        assert!(MappingRule.accepts(&value));
        assert!(DateMappingRule::default().priority() > MappingRule.priority());
    }

    #[test]
    fn test_date_rule_ignores_plain_mappings() {
        let mut map = LispMap::new();
        map.insert("html", "Oct 1, 1949");
        assert!(!DateMappingRule::default().accepts(&Value::from(map)));
        assert!(!DateMappingRule::default().accepts(&Value::from("yyyymmdd")));
    }

    #[test]
    fn test_number_rule_rejects_non_finite() {
        assert!(NumberRule.accepts(&Value::from(1.5)));
        assert!(!NumberRule.accepts(&Value::Number(Number::Float(f64::NAN))));
        assert!(!NumberRule.accepts(&Value::from(true)));
    }

    #[test]
    fn test_literal_flags() {
        assert!(BoolRule.is_literal());
        assert!(NullRule.is_literal());
        assert!(NumberRule.is_literal());
        assert!(KeywordRule.is_literal());
        assert!(!ErrorRule.is_literal());
        assert!(!TextRule::default().is_literal());
        assert!(!SequenceRule.is_literal());
        assert!(!MappingRule.is_literal());
    }

    #[test]
    fn test_only_errors_are_falsy() {
        assert!(ErrorRule.is_falsy());
        assert!(!NullRule.is_falsy());
        assert!(!BoolRule.is_falsy());
    }

    #[test]
    fn test_transform_of_rejected_value_fails() {
        let err = BoolRule.transform(&Value::Null, &encoder()).unwrap_err();
        assert!(err.is_unimplemented_kind());
    }

    #[test]
    fn test_error_rule_without_fields() {
        let form = ErrorRule
            .transform(
                &Value::from(ErrorRecord::new("NotImplementedError")),
                &encoder(),
            )
            .unwrap();
        assert_eq!(form.to_string(), "(:error not-implemented-error)");
    }

    #[test]
    fn test_error_rule_drops_null_attributes() {
        let record = ErrorRecord::new("Timeout").with_attribute("retry", Value::Null);
        let form = ErrorRule
            .transform(&Value::from(record), &encoder())
            .unwrap();
        assert_eq!(form.to_string(), "(:error timeout)");
    }

    #[test]
    fn test_plist_null_key_is_bare() {
        let mut map = LispMap::new();
        map.insert("b", 2);
        map.insert_bare(vec![1, 2]);
        let forms = plist(&map, &encoder(), &[]).unwrap();
        assert_eq!(Form::List(forms).to_string(), "((1 2) :b 2)");
    }

    #[test]
    fn test_verbatim_non_string_is_encoded() {
        let mut map = LispMap::new();
        map.insert("yyyymmdd", 19491001);
        let form = DateMappingRule::default()
            .transform(&Value::from(map), &encoder())
            .unwrap();
        assert_eq!(form.to_string(), "(:yyyymmdd 19491001)");
    }
}
