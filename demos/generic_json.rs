//! Non-graph JSON through the Format Bridge.
//!
//! Run with: cargo run --example generic_json

use autoon::bridge::{self, Format};
use std::error::Error;

const INVENTORY: &str = r#"{
  "warehouse": "north",
  "open": true,
  "tags": ["cold", "bulk"],
  "items": [
    { "sku": "A-100", "name": "Widget", "qty": 12 },
    { "sku": "B-200", "name": "Gadget, large", "qty": 3 }
  ],
  "manager": { "name": "Ada", "since": "2021-04-01" }
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let format = Format::detect(INVENTORY, None);
    println!("Detected format: {}\n", format);

    // No `graph` key, so the generic encoder handles it.
    let text = bridge::generate(INVENTORY, format, None)?;
    println!("{}", text);

    Ok(())
}
