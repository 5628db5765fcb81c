//! Section writer: graph documents to compact notation.
//!
//! Each graph is written as up to four blocks separated by one blank line:
//!
//! ```text
//! graph{id,type,label,directed}:
//!   login-process,process,Login Process,true
//!
//! nodes[2]{id,label,type}:
//!   start,Start,start
//!   end,End,end
//!
//! edges[1]{source,target,relation,label}:
//!   start,end,flows,
//!
//! metadata:
//!   description: User login process flow
//!   tags: [auth,example]
//! ```
//!
//! The graph block is always present; the other blocks only when non-empty.
//! Field orders are fixed. Node and edge metadata, edge ids and edge
//! `directed` flags have no column and are not written.
//!
//! ## Usage
//!
//! Most users should call [`crate::encode`]; the writer is public for callers
//! that stream several graphs into one buffer:
//!
//! ```rust
//! use autoon::{CodecOptions, Graph, GraphType, Writer};
//!
//! let mut writer = Writer::new(CodecOptions::default());
//! writer.write_graph(&Graph::new(GraphType::Class).with_id("empty"));
//!
//! assert_eq!(writer.into_inner(), "graph{id,type,label,directed}:\n  empty,class,,true");
//! ```

use crate::row::{encode_row, Row, INDENT};
use crate::token::write_token;
use crate::{CodecOptions, Document, Edge, Error, Graph, Metadata, Node, Result, Value};

/// Field order of the graph header row.
pub const GRAPH_FIELDS: [&str; 4] = ["id", "type", "label", "directed"];
/// Field order of node rows.
pub const NODE_FIELDS: [&str; 3] = ["id", "label", "type"];
/// Field order of edge rows.
pub const EDGE_FIELDS: [&str; 4] = ["source", "target", "relation", "label"];

/// The compact-notation writer.
///
/// Accumulates one or more graphs into a single output buffer.
pub struct Writer {
    output: String,
    options: CodecOptions,
    graphs_written: usize,
}

impl Writer {
    pub fn new(options: CodecOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            options,
            graphs_written: 0,
        }
    }

    pub fn into_inner(mut self) -> String {
        if self.options.trailing_newline && !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }

    /// Writes every graph of a document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingGraph`] when the document has no graph at all.
    pub fn write_document(&mut self, doc: &Document) -> Result<()> {
        let mut wrote_any = false;
        for graph in doc.all_graphs() {
            self.write_graph(graph);
            wrote_any = true;
        }
        if wrote_any {
            Ok(())
        } else {
            Err(Error::MissingGraph)
        }
    }

    /// Appends one graph, separated from any previous graph by a blank line.
    pub fn write_graph(&mut self, graph: &Graph) {
        let mut blocks = vec![graph_block(graph)];

        if !graph.nodes.is_empty() {
            blocks.push(nodes_block(graph));
        }
        if !graph.edges.is_empty() {
            blocks.push(edges_block(&graph.edges));
        }
        if self.options.include_metadata && !graph.metadata.is_empty() {
            blocks.push(metadata_block(&graph.metadata));
        }

        if self.graphs_written > 0 {
            self.output.push_str("\n\n");
        }
        self.output.push_str(&blocks.join("\n\n"));
        self.graphs_written += 1;

        tracing::trace!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "wrote graph"
        );
    }
}

fn header(name: &str, count: Option<usize>, fields: &[&str]) -> String {
    match count {
        Some(n) => format!("{}[{}]{{{}}}:", name, n, fields.join(",")),
        None => format!("{}{{{}}}:", name, fields.join(",")),
    }
}

fn graph_block(graph: &Graph) -> String {
    let mut row = Row::with_capacity(GRAPH_FIELDS.len());
    row.insert("id".to_string(), Value::from(graph.id.clone()));
    row.insert(
        "type".to_string(),
        Value::from(graph.graph_type.as_str()),
    );
    row.insert("label".to_string(), Value::from(graph.label.clone()));
    row.insert("directed".to_string(), Value::Bool(graph.is_directed()));

    format!(
        "{}\n{}",
        header("graph", None, &GRAPH_FIELDS),
        encode_row(&GRAPH_FIELDS, &row)
    )
}

fn node_row(key: &str, node: &Node) -> Row {
    let mut row = Row::with_capacity(NODE_FIELDS.len());
    row.insert("id".to_string(), Value::from(key));
    row.insert("label".to_string(), Value::from(node.label.clone()));
    row.insert(
        "type".to_string(),
        Value::from(node.node_type.as_ref().map(|t| t.as_str())),
    );
    row
}

fn nodes_block(graph: &Graph) -> String {
    let mut lines = Vec::with_capacity(graph.nodes.len() + 1);
    lines.push(header("nodes", Some(graph.nodes.len()), &NODE_FIELDS));
    for (key, node) in &graph.nodes {
        lines.push(encode_row(&NODE_FIELDS, &node_row(key, node)));
    }
    lines.join("\n")
}

fn edge_row(edge: &Edge) -> Row {
    let mut row = Row::with_capacity(EDGE_FIELDS.len());
    row.insert("source".to_string(), Value::from(edge.source.as_str()));
    row.insert("target".to_string(), Value::from(edge.target.as_str()));
    row.insert(
        "relation".to_string(),
        Value::from(edge.relation.as_ref().map(|r| r.as_str())),
    );
    row.insert("label".to_string(), Value::from(edge.label.clone()));
    row
}

fn edges_block(edges: &[Edge]) -> String {
    let mut lines = Vec::with_capacity(edges.len() + 1);
    lines.push(header("edges", Some(edges.len()), &EDGE_FIELDS));
    for edge in edges {
        lines.push(encode_row(&EDGE_FIELDS, &edge_row(edge)));
    }
    lines.join("\n")
}

fn metadata_block(metadata: &Metadata) -> String {
    let mut lines = Vec::with_capacity(metadata.len() + 1);
    lines.push("metadata:".to_string());
    for (key, value) in metadata {
        let mut line = format!("{}{}:", INDENT, key);
        let mut token = String::new();
        match value {
            Value::List(_) => token.push_str(&value.text()),
            // A bracketed scalar would read back as a list.
            Value::String(s) if s.starts_with('[') && s.ends_with(']') => {
                token.push('"');
                token.push_str(&s.replace('"', "\"\""));
                token.push('"');
            }
            _ => write_token(&mut token, value),
        }
        if !token.is_empty() {
            line.push(' ');
            line.push_str(&token);
        }
        lines.push(line);
    }
    lines.join("\n")
}
