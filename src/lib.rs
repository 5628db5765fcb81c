//! # autoon
//!
//! Typed graph documents (class, instance, process and workflow diagrams) in a
//! compact, line-oriented text notation, plus the structural validator that
//! decides whether a document is acceptable.
//!
//! ## What is the notation?
//!
//! A CSV/YAML hybrid: each section has a header that names its columns once,
//! and every node or edge is a single comma-separated row below it. A graph
//! that takes a page of JSON fits in a dozen short lines. See [`format`] for
//! the full description.
//!
//! ## Key Features
//!
//! - **Round-trip codec**: [`encode`] and [`decode`] between [`Document`] and text
//! - **Permissive decode**: decoding never fails; odd input degrades and is logged
//! - **Strict validation**: [`validate`] reports every schema violation with a JSON pointer
//! - **Bridge**: format detection, JSON conversion and DOT export for tools ([`bridge`])
//!
//! ## Quick Start
//!
//! ```rust
//! use autoon::{decode, encode, Document, Edge, EdgeRelation, Graph, GraphType, Node, NodeType};
//!
//! let graph = Graph::new(GraphType::Class)
//!     .with_id("g1")
//!     .with_node("A", Node::new("A", NodeType::Class))
//!     .with_edge(Edge::new("A", "A").with_relation(EdgeRelation::Uses));
//!
//! let text = encode(&Document::new(graph.clone())).unwrap();
//! assert_eq!(
//!     text,
//!     "graph{id,type,label,directed}:\n  g1,class,,true\n\n\
//!      nodes[1]{id,label,type}:\n  A,A,class\n\n\
//!      edges[1]{source,target,relation,label}:\n  A,A,uses,"
//! );
//!
//! let back = decode(&text).graph.unwrap();
//! assert_eq!(back.nodes, graph.nodes);
//! assert_eq!(back.edges, graph.edges);
//! ```
//!
//! ### Validating
//!
//! ```rust
//! use autoon::validate;
//! use serde_json::json;
//!
//! let result = validate(&json!({"graph": {"type": "bogus", "nodes": {}}})).unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].path, "/graph/type");
//! ```
//!
//! ### Building metadata
//!
//! ```rust
//! use autoon::{metadata, Graph, GraphType};
//!
//! let mut graph = Graph::new(GraphType::Workflow);
//! graph.metadata = metadata!({ "description": "Order flow", "tags": ["orders"] });
//! assert_eq!(graph.metadata.len(), 2);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (mostly at `debug`) for input it skips
//! while decoding. Install any subscriber to see them; the `autoon` binary reads
//! its filter from `AUTOON_LOG`.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`round_trip.rs`** - JSON to compact notation and back
//! - **`validate.rs`** - Reporting schema violations
//! - **`generic_json.rs`** - Non-graph JSON through the generic encoder
//!
//! Run any example with: `cargo run --example <name>`

pub mod bridge;
pub mod de;
pub mod dot;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod model;
pub mod options;
pub mod row;
pub mod schema;
pub mod ser;
pub mod token;
pub mod toon;
pub mod validate;
pub mod value;

pub use bridge::{Format, Report};
pub use de::Parser;
pub use error::{Error, Result};
pub use map::Metadata;
pub use model::{Document, Edge, EdgeRelation, Graph, GraphType, Node, NodeType};
pub use options::CodecOptions;
pub use schema::Schema;
pub use ser::Writer;
pub use validate::{validate, validate_as, validate_document, ValidationResult, Violation};
pub use value::{Number, Value};

use std::io;

/// Encodes a document in the compact notation.
///
/// # Errors
///
/// Returns [`Error::MissingGraph`] when the document has neither `graph` nor `graphs`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode(doc: &Document) -> Result<String> {
    encode_with_options(doc, &CodecOptions::default())
}

/// Encodes a document with custom options.
///
/// # Errors
///
/// Returns [`Error::MissingGraph`] when the document has neither `graph` nor `graphs`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options(doc: &Document, options: &CodecOptions) -> Result<String> {
    let mut writer = Writer::new(options.clone());
    writer.write_document(doc)?;
    Ok(writer.into_inner())
}

/// Encodes a document to a writer.
///
/// # Errors
///
/// Returns an error if the document has no graph or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_to_writer<W>(mut writer: W, doc: &Document, options: &CodecOptions) -> Result<()>
where
    W: io::Write,
{
    let text = encode_with_options(doc, options)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}

/// Decodes compact notation into a document holding exactly one graph.
///
/// Decoding is total: rows that make no sense are skipped, never reported.
/// Run [`validate_document`] on the result to reject unknown types or relations.
#[must_use]
pub fn decode(input: &str) -> Document {
    decode_with_options(input, &CodecOptions::default())
}

/// Decodes compact notation with custom options.
///
/// # Examples
///
/// ```rust
/// use autoon::{decode_with_options, CodecOptions, GraphType};
///
/// let options = CodecOptions::new().with_default_graph_type(GraphType::Process);
/// let doc = decode_with_options("nodes[1]{id}:\n  start", &options);
/// assert_eq!(doc.graph.unwrap().graph_type, GraphType::Process);
/// ```
#[must_use]
pub fn decode_with_options(input: &str, options: &CodecOptions) -> Document {
    Parser::new(input, options).parse()
}

/// Decodes compact notation from bytes.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_slice(bytes: &[u8]) -> Result<Document> {
    let input = std::str::from_utf8(bytes).map_err(|e| Error::Utf8(e.to_string()))?;
    Ok(decode(input))
}

/// Decodes compact notation from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn decode_from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_from_slice(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample() -> Document {
        Document::new(
            Graph::new(GraphType::Instance)
                .with_id("user-instances")
                .with_label("User Instances")
                .with_node("alice", Node::new("alice: User", NodeType::Instance))
                .with_node("adminRole", Node::new("admin: Role", NodeType::Instance))
                .with_edge(
                    Edge::new("alice", "adminRole")
                        .with_relation(EdgeRelation::Has)
                        .with_label("role"),
                ),
        )
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let doc = sample();
        let text = encode(&doc).unwrap();
        let back = decode(&text);
        let (graph, back) = (doc.graph.unwrap(), back.graph.unwrap());
        assert_eq!(back.id, graph.id);
        assert_eq!(back.label, graph.label);
        assert_eq!(back.nodes, graph.nodes);
        assert_eq!(back.edges, graph.edges);
        assert_eq!(back.directed, Some(true));
    }

    #[test]
    fn test_trailing_newline_option() {
        let text = encode_with_options(&sample(), &CodecOptions::new().with_trailing_newline(true))
            .unwrap();
        assert!(text.ends_with("alice,adminRole,has,role\n"));
    }

    #[test]
    fn test_encode_to_writer() {
        let mut buffer = Vec::new();
        encode_to_writer(&mut buffer, &sample(), &CodecOptions::default()).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("graph{"));
    }

    #[test]
    fn test_decode_from_reader() {
        let cursor = Cursor::new(b"graph{id,type}:\n  g,workflow".to_vec());
        let doc = decode_from_reader(cursor).unwrap();
        assert_eq!(doc.graph.unwrap().graph_type, GraphType::Workflow);
    }

    #[test]
    fn test_decode_from_slice_rejects_bad_utf8() {
        assert!(matches!(
            decode_from_slice(&[0x67, 0xff, 0xfe]),
            Err(Error::Utf8(_))
        ));
    }

    #[test]
    fn test_encode_missing_graph() {
        assert!(matches!(encode(&Document::default()), Err(Error::MissingGraph)));
    }

    #[test]
    fn test_decoded_document_validates() {
        let text = encode(&sample()).unwrap();
        let result = validate_document(&decode(&text)).unwrap();
        assert!(result.valid, "{:?}", result.errors);
    }
}
