//! Format Bridge: format detection and the conversions behind the CLI.
//!
//! The bridge takes file *contents* (the caller does the reading and writing)
//! and decides, per input, whether it is JSON or compact notation, whether JSON
//! is a graph document or a generic payload, and which converter to run.
//!
//! ```rust
//! use autoon::bridge::{self, Format};
//!
//! let json = r#"{"graph": {"id": "g", "type": "class", "nodes": {"A": {"type": "class"}}}}"#;
//! let format = Format::detect(json, None);
//! assert_eq!(format, Format::Json);
//!
//! let text = bridge::generate(json, format, None).unwrap();
//! assert!(text.starts_with("graph{id,type,label,directed}:"));
//! ```

use crate::validate::ValidationResult;
use crate::{decode, dot, encode, toon, Document, Error, GraphType, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Input or output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// The compact line-oriented notation.
    Compact,
}

impl Format {
    /// Guesses the format of `content`.
    ///
    /// A `.json` extension or content that starts with `{` or `[` is JSON;
    /// everything else is compact notation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use autoon::Format;
    /// use std::path::Path;
    ///
    /// assert_eq!(Format::detect("  [1, 2]", None), Format::Json);
    /// assert_eq!(Format::detect("graph{id}:", Some(Path::new("model.toon"))), Format::Compact);
    /// assert_eq!(Format::detect("", Some(Path::new("MODEL.JSON"))), Format::Json);
    /// ```
    pub fn detect(content: &str, path: Option<&Path>) -> Format {
        let by_extension = path
            .and_then(Path::extension)
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| ext.eq_ignore_ascii_case("json"));
        let trimmed = content.trim_start();

        let format = if by_extension || trimmed.starts_with('{') || trimmed.starts_with('[') {
            Format::Json
        } else {
            Format::Compact
        };
        tracing::debug!(?format, "detected input format");
        format
    }

    /// File extension for output in this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Compact => "toon",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toon" | "autoon" | "compact" => Ok(Format::Compact),
            other => Err(Error::custom(format!("unknown format `{}`", other))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Returns `true` for a JSON object with a `graph` or `graphs` member.
pub fn is_graph_document(value: &serde_json::Value) -> bool {
    value
        .as_object()
        .map_or(false, |map| map.contains_key("graph") || map.contains_key("graphs"))
}

/// Reads content as a JSON value. Compact input is decoded as a graph document.
pub fn read_value(content: &str, format: Format) -> Result<serde_json::Value> {
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Compact => Ok(serde_json::to_value(decode(content))?),
    }
}

/// Reads content as a typed graph document.
pub fn read_document(content: &str, format: Format) -> Result<Document> {
    match format {
        Format::Json => Ok(serde_json::from_str(content)?),
        Format::Compact => Ok(decode(content)),
    }
}

/// Converts between JSON and compact notation.
///
/// JSON graph documents must pass validation; their violations come back as
/// [`Error::Invalid`]. Other JSON goes through the generic encoder. With no
/// `target`, JSON becomes compact notation and compact notation becomes JSON.
pub fn generate(content: &str, format: Format, target: Option<Format>) -> Result<String> {
    match format {
        Format::Json => {
            let value: serde_json::Value = serde_json::from_str(content)?;
            let target = target.unwrap_or(Format::Compact);

            if is_graph_document(&value) {
                crate::validate(&value)?.into_result()?;
                match target {
                    Format::Json => Ok(serde_json::to_string_pretty(&value)?),
                    Format::Compact => {
                        let doc: Document = serde_json::from_value(value)?;
                        encode(&doc)
                    }
                }
            } else {
                tracing::debug!("input is not a graph document, using the generic encoder");
                match target {
                    Format::Json => Ok(serde_json::to_string_pretty(&value)?),
                    Format::Compact => Ok(toon::encode_json(&value)),
                }
            }
        }
        Format::Compact => {
            let doc = decode(content);
            match target.unwrap_or(Format::Json) {
                Format::Json => Ok(serde_json::to_string_pretty(&doc)?),
                Format::Compact => encode(&doc),
            }
        }
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub result: ValidationResult,
    /// Type word of the first graph, as written.
    pub graph_type: Option<String>,
    pub nodes: usize,
    pub edges: usize,
    /// Set when an expected type was given and the first graph has another.
    pub type_mismatch: bool,
}

impl Report {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.result.valid
    }
}

/// Validates content and summarizes its first graph.
///
/// A type mismatch is reported as a flag, not a violation.
pub fn check(content: &str, format: Format, expected: Option<&GraphType>) -> Result<Report> {
    let value = read_value(content, format)?;
    let result = crate::validate(&value)?;

    let graph = value
        .get("graph")
        .or_else(|| value.get("graphs").and_then(|graphs| graphs.get(0)));
    let graph_type = graph
        .and_then(|g| g.get("type"))
        .and_then(|t| t.as_str())
        .map(str::to_string);
    let nodes = graph
        .and_then(|g| g.get("nodes"))
        .and_then(|n| n.as_object())
        .map_or(0, |n| n.len());
    let edges = graph
        .and_then(|g| g.get("edges"))
        .and_then(|e| e.as_array())
        .map_or(0, |e| e.len());
    let type_mismatch =
        expected.map_or(false, |expected| graph_type.as_deref() != Some(expected.as_str()));

    Ok(Report {
        result,
        graph_type,
        nodes,
        edges,
        type_mismatch,
    })
}

/// Renders the first graph of the content as Graphviz DOT.
pub fn visualize(content: &str, format: Format) -> Result<String> {
    let doc = read_document(content, format)?;
    let graph = doc.first_graph().ok_or(Error::MissingGraph)?;
    Ok(dot::graph_to_dot(graph))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROCESS: &str = r#"{
        "graph": {
            "id": "login-process",
            "type": "process",
            "nodes": {
                "start": {"label": "Start", "type": "start"},
                "end": {"label": "End", "type": "end"}
            },
            "edges": [{"source": "start", "target": "end", "relation": "flows"}]
        }
    }"#;

    #[test]
    fn test_format_names() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("toon".parse::<Format>().unwrap(), Format::Compact);
        assert!("yaml".parse::<Format>().is_err());
        assert_eq!(Format::Compact.to_string(), "toon");
    }

    #[test]
    fn test_graph_document_detection() {
        assert!(is_graph_document(&serde_json::json!({"graphs": []})));
        assert!(!is_graph_document(&serde_json::json!({"users": []})));
        assert!(!is_graph_document(&serde_json::json!([1])));
    }

    #[test]
    fn test_generate_json_to_compact_and_back() {
        let text = generate(PROCESS, Format::Json, None).unwrap();
        assert!(text.contains("edges[1]{source,target,relation,label}:\n  start,end,flows,"));

        let json = generate(&text, Format::Compact, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["graph"]["nodes"]["end"]["type"], "end");
    }

    #[test]
    fn test_generate_rejects_invalid_graph() {
        let err = generate(r#"{"graph": {"type": "bogus"}}"#, Format::Json, None).unwrap_err();
        match err {
            Error::Invalid(result) => assert_eq!(result.errors.len(), 2),
            other => panic!("Expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_generic_json() {
        let text = generate(r#"{"tags": ["a", "b"]}"#, Format::Json, None).unwrap();
        assert_eq!(text, "tags[2]: a,b");

        let pretty = generate(r#"{"tags":["a"]}"#, Format::Json, Some(Format::Json)).unwrap();
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_check_reports_counts_and_mismatch() {
        let report = check(PROCESS, Format::Json, Some(&GraphType::Workflow)).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.graph_type.as_deref(), Some("process"));
        assert_eq!(report.nodes, 2);
        assert_eq!(report.edges, 1);
        assert!(report.type_mismatch);
    }

    #[test]
    fn test_check_compact_with_unknown_type() {
        let report = check("graph{id,type}:\n  g,bogus", Format::Compact, None).unwrap();
        assert!(!report.is_valid());
        assert!(!report.type_mismatch);
    }

    #[test]
    fn test_visualize_without_graph() {
        assert!(matches!(
            visualize("{}", Format::Json),
            Err(Error::MissingGraph)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            check("{\"graph\": ", Format::Json, None),
            Err(Error::Json { .. })
        ));
    }
}
