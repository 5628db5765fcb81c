//! Section parser: compact notation to graph documents.
//!
//! The parser walks the input line by line and tracks which section is active.
//! A header line (`graph{..}:`, `name[N]{..}:` or `metadata:`) always switches
//! the section; an indented line is a data row for the active section; blank
//! lines are skipped and never end a section.
//!
//! Decoding is total. Odd input is logged at `debug` level and skipped, never
//! reported as an error:
//!
//! - lines outside any section
//! - edges without a source or target
//! - rows under array headers other than `nodes` and `edges`
//! - everything after a second `graph{..}:` header
//!
//! ```rust
//! use autoon::{decode, GraphType};
//!
//! let doc = decode("graph{id,type}:\n  g1,process\n\nedges[1]{source,target}:\n  ,B");
//! let graph = doc.graph.unwrap();
//!
//! assert_eq!(graph.graph_type, GraphType::Process);
//! assert!(graph.edges.is_empty());
//! ```

use crate::row::{decode_row, ends_inside_quotes, split_row, Row, INDENT};
use crate::token::{decode_token, unquote};
use crate::{CodecOptions, Document, Edge, EdgeRelation, Graph, GraphType, Node, NodeType, Value};

/// A recognized header line.
#[derive(Debug, Clone, PartialEq)]
enum Header {
    Graph(Vec<String>),
    Array {
        name: String,
        count: usize,
        fields: Vec<String>,
    },
    Metadata,
}

/// Rows seen under a counted array header.
#[derive(Debug)]
struct Table {
    fields: Vec<String>,
    declared: usize,
    rows: usize,
}

impl Table {
    fn new(fields: Vec<String>, declared: usize) -> Self {
        Table {
            fields,
            declared,
            rows: 0,
        }
    }
}

/// The section the parser is currently in.
#[derive(Debug)]
enum Section {
    None,
    GraphHeader(Vec<String>),
    Nodes(Table),
    Edges(Table),
    Metadata,
    /// An array header with a name the graph model has no place for.
    Skipped(String),
}

/// The compact-notation parser.
///
/// Most users should call [`crate::decode`] instead.
pub struct Parser<'a> {
    lines: Vec<&'a str>,
    position: usize,
    section: Section,
    graph: Graph,
    seen_graph_header: bool,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str, options: &CodecOptions) -> Self {
        Parser {
            lines: input.lines().collect(),
            position: 0,
            section: Section::None,
            graph: Graph::new(options.default_graph_type.clone()),
            seen_graph_header: false,
        }
    }

    /// Consumes the parser and returns a document holding exactly one graph.
    pub fn parse(mut self) -> Document {
        while self.position < self.lines.len() {
            let raw = self.lines[self.position];
            let line = raw.trim_end();
            self.position += 1;

            if line.trim().is_empty() {
                continue;
            }

            if let Some(header) = parse_header(line) {
                if !self.enter(header) {
                    break;
                }
                continue;
            }

            match raw.strip_prefix(INDENT) {
                Some(data) => {
                    let data = self.join_continuation(data);
                    self.row(data.trim_end());
                }
                None => {
                    tracing::debug!(line = self.position, "ignoring unindented line that is not a header");
                }
            }
        }

        self.close_section();
        Document::new(self.graph)
    }

    /// Switches to the section a header opens. Returns `false` when parsing
    /// should stop.
    fn enter(&mut self, header: Header) -> bool {
        self.close_section();

        self.section = match header {
            Header::Graph(fields) => {
                if self.seen_graph_header {
                    tracing::debug!(
                        line = self.position,
                        "ignoring second graph header and everything after it"
                    );
                    return false;
                }
                self.seen_graph_header = true;
                Section::GraphHeader(fields)
            }
            Header::Array {
                name,
                count,
                fields,
            } => match name.as_str() {
                "nodes" => Section::Nodes(Table::new(fields, count)),
                "edges" => Section::Edges(Table::new(fields, count)),
                _ => Section::Skipped(name),
            },
            Header::Metadata => Section::Metadata,
        };
        true
    }

    fn close_section(&mut self) {
        let section = std::mem::replace(&mut self.section, Section::None);
        if let Section::Nodes(table) | Section::Edges(table) = &section {
            if table.rows != table.declared {
                tracing::debug!(
                    declared = table.declared,
                    found = table.rows,
                    "array row count differs from its header"
                );
            }
        }
    }

    /// Joins the physical lines of a row whose last quoted cell spans lines.
    ///
    /// Lines are joined untrimmed so whitespace inside the quoted cell survives.
    fn join_continuation(&mut self, data: &'a str) -> String {
        let mut joined = data.to_string();
        while self.continues(&joined) && self.position < self.lines.len() {
            let next = self.lines[self.position];
            if parse_header(next.trim_end()).is_some() {
                break;
            }
            joined.push('\n');
            joined.push_str(next);
            self.position += 1;
        }
        joined
    }

    fn continues(&self, data: &str) -> bool {
        match self.section {
            Section::Metadata => data
                .split_once(':')
                .map_or(false, |(_, value)| ends_inside_quotes(value)),
            Section::None => false,
            _ => ends_inside_quotes(data),
        }
    }

    fn row(&mut self, data: &str) {
        match &mut self.section {
            Section::None => {
                tracing::debug!(line = self.position, "ignoring data row outside any section");
            }
            Section::GraphHeader(fields) => {
                let row = decode_row(data, fields.as_slice());
                apply_graph_row(&mut self.graph, row);
            }
            Section::Nodes(table) => {
                table.rows += 1;
                let cells = split_row(data);
                let (key, node) = node_from_cells(&table.fields, &cells);
                let key = key.unwrap_or_else(|| format!("node_{}", self.graph.nodes.len()));
                self.graph.nodes.insert(key, node);
            }
            Section::Edges(table) => {
                table.rows += 1;
                let cells = split_row(data);
                let edge = edge_from_cells(&table.fields, &cells);
                if edge.source.is_empty() || edge.target.is_empty() {
                    tracing::debug!(line = self.position, "dropping edge without source or target");
                } else {
                    self.graph.edges.push(edge);
                }
            }
            Section::Metadata => {
                let Some((key, value)) = data.split_once(':') else {
                    tracing::debug!(line = self.position, "ignoring metadata line without a key");
                    return;
                };
                let key = key.trim();
                if key.is_empty() {
                    return;
                }
                let value = metadata_value(value.trim());
                if !value.is_null() {
                    self.graph.metadata.insert(key.to_string(), value);
                }
            }
            Section::Skipped(name) => {
                tracing::trace!(section = %name, "skipping row of unknown array");
            }
        }
    }
}

/// Parses a header line. Headers are never indented.
fn parse_header(line: &str) -> Option<Header> {
    if line == "metadata:" {
        return Some(Header::Metadata);
    }

    let body = line.strip_suffix("}:")?;
    let (head, fields) = body.split_once('{')?;
    if fields.is_empty() || fields.contains('}') {
        return None;
    }
    let fields: Vec<String> = fields.split(',').map(|f| f.trim().to_string()).collect();

    if head == "graph" {
        return Some(Header::Graph(fields));
    }

    let (name, count) = head.strip_suffix(']')?.split_once('[')?;
    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return None;
    }
    if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(Header::Array {
        name: name.to_string(),
        count: count.parse().ok()?,
        fields,
    })
}

/// Text of a decoded value, `None` when it is null or empty.
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.text()),
    }
}

/// Text of a raw cell with its quotes removed, `None` when empty.
fn cell_text(cell: &str) -> Option<String> {
    let text = unquote(cell);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn apply_graph_row(graph: &mut Graph, row: Row) {
    for (field, value) in row {
        match field.as_str() {
            "id" => {
                if let Some(id) = value_text(&value) {
                    graph.id = Some(id);
                }
            }
            "type" => {
                if let Some(word) = value_text(&value) {
                    graph.graph_type = GraphType::from(word);
                }
            }
            "label" => {
                if let Some(label) = value_text(&value) {
                    graph.label = Some(label);
                }
            }
            "directed" => {
                if !value.is_null() {
                    let directed =
                        matches!(value, Value::Bool(true)) || value.as_str() == Some("true");
                    graph.directed = Some(directed);
                }
            }
            _ => {
                if !value.is_null() {
                    graph.metadata.insert(field, value);
                }
            }
        }
    }
}

/// Maps a node row to its key (when the row has one) and the node.
fn node_from_cells(fields: &[String], cells: &[&str]) -> (Option<String>, Node) {
    let mut key = None;
    let mut node = Node::default();

    for (field, cell) in fields.iter().zip(cells) {
        match field.as_str() {
            "id" => key = cell_text(cell),
            "label" => node.label = cell_text(cell),
            "type" => node.node_type = cell_text(cell).map(NodeType::from),
            other => {
                let value = decode_token(cell);
                if !value.is_null() {
                    node.metadata.insert(other.to_string(), value);
                }
            }
        }
    }

    (key, node)
}

fn edge_from_cells(fields: &[String], cells: &[&str]) -> Edge {
    let mut edge = Edge::default();

    for (field, cell) in fields.iter().zip(cells) {
        match field.as_str() {
            "id" => edge.id = cell_text(cell),
            "source" => edge.source = cell_text(cell).unwrap_or_default(),
            "target" => edge.target = cell_text(cell).unwrap_or_default(),
            "relation" => edge.relation = cell_text(cell).map(EdgeRelation::from),
            "label" => edge.label = cell_text(cell),
            "directed" => edge.directed = decode_token(cell).as_bool(),
            other => {
                let value = decode_token(cell);
                if !value.is_null() {
                    edge.metadata.insert(other.to_string(), value);
                }
            }
        }
    }

    edge
}

/// Decodes the text after `key:` in a metadata block.
///
/// A bracketed value is a list of strings; anything else goes through the
/// Value Codec.
fn metadata_value(text: &str) -> Value {
    if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
        let inner = text[1..text.len() - 1].trim();
        if inner.is_empty() {
            return Value::List(Vec::new());
        }
        return Value::List(
            split_row(inner)
                .into_iter()
                .map(|item| Value::String(unquote(item)))
                .collect(),
        );
    }
    decode_token(text)
}
