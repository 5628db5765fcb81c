//! Graphviz DOT export.
//!
//! ```rust
//! use autoon::{dot::graph_to_dot, Edge, EdgeRelation, Graph, GraphType, Node, NodeType};
//!
//! let graph = Graph::new(GraphType::Process)
//!     .with_id("login")
//!     .with_node("start", Node::new("Start", NodeType::Start))
//!     .with_node("end", Node::new("End", NodeType::End))
//!     .with_edge(Edge::new("start", "end").with_relation(EdgeRelation::Flows));
//!
//! let dot = graph_to_dot(&graph);
//! assert!(dot.starts_with("digraph \"login\" {"));
//! assert!(dot.contains("  \"start\" -> \"end\" [tooltip=\"flows\"];"));
//! ```

use crate::{Graph, NodeType};

/// Graph name used when a graph has no id.
pub const DEFAULT_NAME: &str = "autoon";

/// Node attributes for each node kind.
fn node_style(node_type: Option<&NodeType>) -> &'static str {
    match node_type {
        Some(NodeType::Class) => r##"shape=box, style=filled, fillcolor="#e3f2fd""##,
        Some(NodeType::Attribute) => r##"shape=ellipse, style=filled, fillcolor="#fff3e0""##,
        Some(NodeType::Method) => r##"shape=ellipse, style=filled, fillcolor="#f3e5f5""##,
        Some(NodeType::Instance) => r##"shape=box, style="filled,rounded", fillcolor="#e8f5e9""##,
        Some(NodeType::State) => r##"shape=box, style="filled,rounded", fillcolor="#fce4ec""##,
        Some(NodeType::Action) => r##"shape=box, style=filled, fillcolor="#e0f7fa""##,
        Some(NodeType::Decision) => r##"shape=diamond, style=filled, fillcolor="#fff9c4""##,
        Some(NodeType::Start) => r##"shape=circle, style=filled, fillcolor="#c8e6c9", width=0.3"##,
        Some(NodeType::End) => {
            r##"shape=doublecircle, style=filled, fillcolor="#ffcdd2", width=0.3"##
        }
        Some(NodeType::Fork) | Some(NodeType::Join) => {
            r##"shape=rect, style=filled, fillcolor="#424242", width=1, height=0.1"##
        }
        Some(NodeType::Other(_)) | None => "shape=box",
    }
}

/// Escapes text for use inside a double-quoted DOT string.
pub fn escape_id(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders a graph as a DOT `digraph` (or `graph` when undirected).
#[must_use]
pub fn graph_to_dot(graph: &Graph) -> String {
    let directed = graph.is_directed();
    let (keyword, edge_op) = if directed {
        ("digraph", "->")
    } else {
        ("graph", "--")
    };

    let mut lines = Vec::with_capacity(graph.nodes.len() + graph.edges.len() + 8);
    lines.push(format!(
        "{} \"{}\" {{",
        keyword,
        escape_id(graph.id.as_deref().unwrap_or(DEFAULT_NAME))
    ));
    lines.push("  rankdir=TB;".to_string());
    lines.push("  node [fontname=\"Helvetica\", fontsize=11];".to_string());
    lines.push("  edge [fontname=\"Helvetica\", fontsize=10];".to_string());
    lines.push(String::new());

    for (id, node) in &graph.nodes {
        let label = node.label.as_deref().unwrap_or(id);
        lines.push(format!(
            "  \"{}\" [label=\"{}\", {}];",
            escape_id(id),
            escape_id(label),
            node_style(node.node_type.as_ref())
        ));
    }

    lines.push(String::new());

    for edge in &graph.edges {
        let mut attrs = Vec::new();
        if let Some(label) = &edge.label {
            attrs.push(format!("label=\"{}\"", escape_id(label)));
        }
        if let Some(relation) = &edge.relation {
            attrs.push(format!("tooltip=\"{}\"", escape_id(relation.as_str())));
        }
        let attrs = if attrs.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attrs.join(", "))
        };
        lines.push(format!(
            "  \"{}\" {} \"{}\"{};",
            escape_id(&edge.source),
            edge_op,
            escape_id(&edge.target),
            attrs
        ));
    }

    lines.push("}".to_string());
    lines.join("\n")
}
