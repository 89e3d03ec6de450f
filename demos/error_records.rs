//! Returning failures as encoded error records.
//!
//! Run with: cargo run --example error_records

use serde_lispify::{encode, EncodedNode, ErrorRecord, LispMap};
use std::error::Error;

#[derive(Debug, thiserror::Error)]
#[error("no entry named {0}")]
struct ResourceNotFound(String);

fn lookup(name: &str) -> serde_lispify::Result<EncodedNode> {
    if name == "Ada Lovelace" {
        let mut answer = LispMap::new();
        answer.insert("name", name);
        answer.insert("gender", ":feminine");
        return encode(answer);
    }

    let err = ResourceNotFound(name.to_string());
    let record = ErrorRecord::from_error(&err)
        .with_attribute("reply", format!("I don't know who {} is.", name));
    encode(record)
}

fn main() -> Result<(), Box<dyn Error>> {
    for name in ["Ada Lovelace", "Nobody"] {
        let answer = lookup(name)?;
        if answer.is_truthy() {
            println!("answer:  {}", answer);
        } else {
            println!("failure: {}", answer);
        }
    }

    let parse_failure = "twelve".parse::<u32>().unwrap_err();
    println!("{}", encode(ErrorRecord::from_error(&parse_failure))?);

    Ok(())
}
