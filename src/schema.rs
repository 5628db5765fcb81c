//! The structural schema for graph documents.
//!
//! The schema is a draft 2020-12 JSON Schema embedded in the crate. Compiling it
//! is the only expensive step of validation, so the process keeps one compiled
//! copy behind [`Schema::shared`]. Callers that want their own instance (tests,
//! long-lived services that inject dependencies) can use [`Schema::compile`].
//!
//! ```rust
//! use autoon::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::shared().unwrap();
//! let result = schema.validate(&json!({"graph": {"type": "workflow", "nodes": {}}}));
//! assert!(result.valid);
//! ```

use crate::validate::{ValidationResult, Violation};
use crate::{Error, Result};
use jsonschema::error::ValidationErrorKind;
use jsonschema::Validator;
use once_cell::sync::Lazy;

/// Source text of the embedded schema.
pub const SCHEMA_SOURCE: &str = include_str!("autoon.schema.json");

static SHARED: Lazy<std::result::Result<Schema, String>> = Lazy::new(|| {
    tracing::debug!("compiling graph document schema");
    Schema::compile().map_err(|e| e.to_string())
});

/// A compiled graph document schema.
pub struct Schema {
    validator: Validator,
}

impl Schema {
    /// Compiles the embedded schema.
    pub fn compile() -> Result<Self> {
        let source: serde_json::Value = serde_json::from_str(SCHEMA_SOURCE)?;
        Self::from_value(&source)
    }

    /// Compiles an arbitrary JSON Schema document.
    ///
    /// `format` keywords are asserted, not just annotated: a `date-time` field
    /// holding `yesterday` is a violation.
    pub fn from_value(schema: &serde_json::Value) -> Result<Self> {
        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(schema)
            .map_err(|e| Error::Schema(e.to_string()))?;
        Ok(Schema { validator })
    }

    /// The process-wide compiled schema, built on first use.
    pub fn shared() -> Result<&'static Schema> {
        SHARED.as_ref().map_err(|msg| Error::Schema(msg.clone()))
    }

    /// Checks `instance` and reports every violation, not just the first.
    #[must_use]
    pub fn validate(&self, instance: &serde_json::Value) -> ValidationResult {
        let violations = self
            .validator
            .iter_errors(instance)
            .map(|err| {
                let mut path = err.instance_path.to_string();
                if let ValidationErrorKind::Required { property } = &err.kind {
                    if let Some(name) = property.as_str() {
                        path.push('/');
                        path.push_str(name);
                    }
                }
                if path.is_empty() {
                    path.push('/');
                }

                let schema_path = err.schema_path.to_string();
                let keyword = schema_path.rsplit('/').next().filter(|k| !k.is_empty());

                Violation::new(path, err.to_string(), keyword)
            })
            .collect();

        ValidationResult::from_violations(violations)
    }
}
