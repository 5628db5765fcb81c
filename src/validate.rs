//! Document Validator.
//!
//! Validation is a separate pass from decoding: decode whatever text arrives,
//! inspect it, then decide whether to accept it. Every rule is checked and every
//! violation is returned, so a caller can show the full list at once.
//!
//! ## Examples
//!
//! ```rust
//! use autoon::validate;
//! use serde_json::json;
//!
//! let result = validate(&json!({"graph": {"type": "class"}})).unwrap();
//! assert!(!result.valid);
//! assert_eq!(result.errors[0].path, "/graph/nodes");
//! ```

use crate::{Document, Error, GraphType, Result, Schema};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer to the offending location; `/` for the document itself.
    pub path: String,
    pub message: String,
    /// The schema keyword that failed (`required`, `enum`, `oneOf`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>, keyword: Option<&str>) -> Self {
        Violation {
            path: path.into(),
            message: message.into(),
            keyword: keyword.map(str::to_string),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<Violation>,
}

impl ValidationResult {
    /// A passing result.
    #[must_use]
    pub fn ok() -> Self {
        ValidationResult {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// `valid` is `true` exactly when `violations` is empty.
    #[must_use]
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        ValidationResult {
            valid: violations.is_empty(),
            errors: violations,
        }
    }

    /// Adds a violation and marks the result invalid.
    pub fn push(&mut self, violation: Violation) {
        self.valid = false;
        self.errors.push(violation);
    }

    /// Turns a failing result into [`Error::Invalid`].
    pub fn into_result(self) -> Result<()> {
        if self.valid {
            Ok(())
        } else {
            Err(Error::Invalid(self))
        }
    }
}

/// Validates a JSON value against the shared document schema.
///
/// # Errors
///
/// Only fails when the embedded schema cannot be compiled. Rule violations are
/// data in the returned [`ValidationResult`], never an `Err`.
pub fn validate(value: &serde_json::Value) -> Result<ValidationResult> {
    let result = Schema::shared()?.validate(value);
    if !result.valid {
        tracing::debug!(errors = result.errors.len(), "document failed validation");
    }
    Ok(result)
}

/// Validates a typed document.
///
/// Decoded documents carry whatever words the text held, so this is how a
/// decoded graph with an unknown type or relation gets rejected.
pub fn validate_document(doc: &Document) -> Result<ValidationResult> {
    let value = serde_json::to_value(doc)?;
    validate(&value)
}

/// Validates `value` and also requires its first graph to be of `expected` type.
///
/// # Examples
///
/// ```rust
/// use autoon::{validate_as, GraphType};
/// use serde_json::json;
///
/// let doc = json!({"graph": {"type": "class", "nodes": {}}});
/// let result = validate_as(&doc, GraphType::Process).unwrap();
/// assert!(!result.valid);
/// assert_eq!(result.errors[0].path, "/graph/type");
/// ```
pub fn validate_as(value: &serde_json::Value, expected: GraphType) -> Result<ValidationResult> {
    let mut result = validate(value)?;

    let (path, actual) = match (value.get("graph"), value.get("graphs")) {
        (Some(graph), _) => ("/graph/type", graph.get("type")),
        (None, Some(graphs)) => (
            "/graphs/0/type",
            graphs.get(0).and_then(|graph| graph.get("type")),
        ),
        (None, None) => return Ok(result),
    };

    if let Some(actual) = actual.and_then(|t| t.as_str()) {
        if actual != expected.as_str() {
            result.push(Violation::new(
                path,
                format!("expected a {} graph, found {}", expected, actual),
                Some("const"),
            ));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Graph, Node, NodeType};
    use serde_json::json;

    #[test]
    fn test_minimal_document_is_valid() {
        let result = validate(&json!({"graph": {"type": "workflow", "nodes": {}}})).unwrap();
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_null_document_is_invalid() {
        let result = validate(&serde_json::Value::Null).unwrap();
        assert!(!result.valid);
        assert!(result.errors.iter().all(|e| e.path == "/"));
    }

    #[test]
    fn test_all_violations_are_reported() {
        let doc = json!({
            "graph": {
                "type": "class",
                "nodes": {"A": {"type": "widget"}},
                "edges": [{"source": "A", "relation": "likes"}]
            }
        });
        let result = validate(&doc).unwrap();
        let paths: Vec<_> = result.errors.iter().map(|e| e.path.as_str()).collect();
        assert!(paths.contains(&"/graph/nodes/A/type"));
        assert!(paths.contains(&"/graph/edges/0/target"));
        assert!(paths.contains(&"/graph/edges/0/relation"));
    }

    #[test]
    fn test_document_with_unknown_relation() {
        let graph = Graph::new(GraphType::Class)
            .with_node("A", Node::new("A", NodeType::Class))
            .with_edge(Edge::new("A", "A").with_relation("depends".into()));
        let result = validate_document(&Document::new(graph)).unwrap();
        assert!(!result.valid);
        assert_eq!(result.errors[0].keyword.as_deref(), Some("enum"));
    }

    #[test]
    fn test_validate_as_checks_first_of_graphs() {
        let doc = json!({"graphs": [{"type": "process", "nodes": {}}]});
        assert!(validate_as(&doc, GraphType::Process).unwrap().valid);

        let result = validate_as(&doc, GraphType::Workflow).unwrap();
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "/graphs/0/type");
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::ok().into_result().is_ok());
        let failing = ValidationResult::from_violations(vec![Violation::new("/", "bad", None)]);
        assert!(matches!(failing.into_result(), Err(Error::Invalid(_))));
    }

    #[test]
    fn test_result_serializes_without_empty_errors() {
        assert_eq!(
            serde_json::to_string(&ValidationResult::ok()).unwrap(),
            r#"{"valid":true}"#
        );
    }
}
