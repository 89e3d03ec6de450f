//! Basic encoding of structs, lists and keywords.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_lispify::{encode, to_string};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Person {
    name: String,
    gender: String,
    children: Vec<String>,
    spouse: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let person = Person {
        name: "Ada Lovelace".to_string(),
        gender: ":feminine".to_string(),
        children: vec!["Byron".to_string(), "Anne".to_string(), "Ralph".to_string()],
        spouse: None,
    };

    // Structs become sorted plists, None fields are dropped
    let lisp = to_string(&person)?;
    println!("Lisp output:\n{}\n", lisp);

    let list = encode(vec!["wikipedia-class1", "wikipedia-class2"])?;
    println!("{}", list);
    println!("contains \"wikipedia-class1\": {}", list.contains("wikipedia-class1"));

    // Encoding an encoded node gives it back unchanged
    let again = encode(list.clone())?;
    assert_eq!(list, again);
    println!("✓ Idempotent");

    Ok(())
}
