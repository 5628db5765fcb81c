//! A class diagram from JSON to compact notation and back.
//!
//! Run with: cargo run --example round_trip

use autoon::{decode, encode, Document};
use std::error::Error;

const USER_MODEL: &str = r#"{
  "graph": {
    "id": "user-model",
    "type": "class",
    "label": "User Management Classes",
    "directed": true,
    "nodes": {
      "User": { "label": "User", "type": "class" },
      "id": { "label": "id: string", "type": "attribute" },
      "email": { "label": "email: string", "type": "attribute" },
      "role": { "label": "role: Role", "type": "attribute" },
      "login": { "label": "login()", "type": "method" },
      "Role": { "label": "Role", "type": "class" },
      "Admin": { "label": "Admin", "type": "class" }
    },
    "edges": [
      { "source": "User", "target": "id", "relation": "has" },
      { "source": "User", "target": "email", "relation": "has" },
      { "source": "User", "target": "role", "relation": "has" },
      { "source": "User", "target": "login", "relation": "has" },
      { "source": "User", "target": "Role", "relation": "uses" },
      { "source": "Admin", "target": "User", "relation": "inherits" }
    ],
    "metadata": {
      "description": "Example class diagram for user management",
      "version": "1.0.0",
      "tags": ["user", "auth", "example"]
    }
  }
}"#;

fn main() -> Result<(), Box<dyn Error>> {
    let doc: Document = serde_json::from_str(USER_MODEL)?;

    let text = encode(&doc)?;
    println!("Compact notation ({} bytes vs {} bytes of JSON):\n", text.len(), USER_MODEL.len());
    println!("{}\n", text);

    let back = decode(&text);
    println!("Decoded back to JSON:\n");
    println!("{}", serde_json::to_string_pretty(&back)?);

    assert_eq!(back, doc);
    println!("\nRound trip preserved every field.");

    Ok(())
}
