//! Extending the encoder with rules of your own.
//!
//! Run with: cargo run --example custom_rules

use serde_lispify::{Encoder, Form, LispOptions, Registry, Result, Rule, Value};
use std::error::Error;

/// Writes opaque host values as quoted symbols instead of failing.
#[derive(Debug)]
struct QuotedSymbol;

impl Rule for QuotedSymbol {
    fn name(&self) -> &'static str {
        "quoted-symbol"
    }

    fn priority(&self) -> u8 {
        0
    }

    fn accepts(&self, value: &Value) -> bool {
        matches!(value, Value::Opaque(_))
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        match value {
            Value::Opaque(name) => Ok(Form::atom(format!("'{}", name))),
            _ => Ok(Form::atom("nil")),
        }
    }
}

/// Writes strings that look like paths as `#p"..."` pathnames.
///
/// It outranks the text rule, so it sees path strings first.
#[derive(Debug)]
struct Pathname;

impl Rule for Pathname {
    fn name(&self) -> &'static str {
        "pathname"
    }

    fn priority(&self) -> u8 {
        5
    }

    fn is_literal(&self) -> bool {
        true
    }

    fn accepts(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| s.starts_with('/'))
    }

    fn transform(&self, value: &Value, _encoder: &Encoder) -> Result<Form> {
        let path = value.as_str().unwrap_or_default();
        Ok(Form::atom(format!("#p{}", serde_lispify::rules::quote(path, false))))
    }
}

/// Rejected at registration: priorities stop at 15.
#[derive(Debug)]
struct Overeager;

impl Rule for Overeager {
    fn name(&self) -> &'static str {
        "overeager"
    }

    fn priority(&self) -> u8 {
        99
    }

    fn accepts(&self, _value: &Value) -> bool {
        true
    }

    fn transform(&self, _value: &Value, _encoder: &Encoder) -> Result<Form> {
        Ok(Form::atom("nil"))
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    let registry = Registry::builder()
        .with_standard_rules(&LispOptions::default())
        .register(QuotedSymbol)?
        .register(Pathname)?
        .build();
    println!("Dispatch order: {:?}\n", registry.names());

    let encoder = Encoder::new(registry);
    let value = Value::Sequence(vec![
        Value::Opaque("identity".to_string()),
        Value::from("/etc/hosts"),
        Value::from("plain text"),
    ]);
    let node = encoder.encode(value)?;
    println!("{}", node);
    assert_eq!(node, "('identity #p\"/etc/hosts\" \"plain text\")");

    // The standard encoder still refuses opaque values
    let refused = Encoder::default().encode(Value::Opaque("identity".to_string()));
    println!("standard encoder: {}", refused.unwrap_err());

    match Registry::builder().register(Overeager) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(e) => println!("registration failed: {}", e),
    }

    Ok(())
}
