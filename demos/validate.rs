//! Decode permissively, then validate before accepting.
//!
//! Run with: cargo run --example validate

use autoon::{decode, validate, validate_document};
use serde_json::json;
use std::error::Error;

const HAND_WRITTEN: &str = "\
graph{id,type,label}:
  order-workflow,workflow,Order Processing

nodes[4]{id,label,type}:
  start,Order Received,start
  pay,Process Payment,action
  ship,Ship Order,task
  end,Complete,end

edges[4]{source,target,relation}:
  start,pay,flows
  pay,ship,flows
  ship,,flows
  ship,end,depends
";

fn main() -> Result<(), Box<dyn Error>> {
    // Decoding never fails; it keeps what it can.
    let doc = decode(HAND_WRITTEN);
    let graph = doc.first_graph().ok_or("no graph")?;
    println!(
        "Decoded {} nodes and {} edges (the edge without a target was dropped)",
        graph.nodes.len(),
        graph.edges.len()
    );

    let result = validate_document(&doc)?;
    println!("\nvalid: {}", result.valid);
    for violation in &result.errors {
        println!("  {} [{}]", violation, violation.keyword.as_deref().unwrap_or("-"));
    }

    // Raw JSON works the same way, and reports every problem at once.
    let raw = json!({
        "graph": {
            "type": "diagram",
            "edges": [{ "source": "a" }]
        }
    });
    let result = validate(&raw)?;
    println!("\nRaw JSON, valid: {}", result.valid);
    for violation in &result.errors {
        println!("  {}", violation);
    }

    Ok(())
}
