//! Error types for graph conversion and validation.
//!
//! Decoding the compact notation never fails: odd input degrades to a best-effort
//! graph (see [`crate::de`]). Errors only come from the edges of the system:
//!
//! - **I/O Errors**: reading or writing a stream failed
//! - **JSON Errors**: malformed JSON input, with line/column information
//! - **Missing Graph**: a document holds neither `graph` nor `graphs`
//! - **Invalid Documents**: a JSON graph document violated the schema
//!
//! ## Examples
//!
//! ```rust
//! use autoon::{bridge, Error, Format};
//!
//! let result = bridge::generate("{\"graph\": ", Format::Json, None);
//! assert!(matches!(result, Err(Error::Json { .. })));
//! ```

use crate::validate::ValidationResult;
use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while converting graph documents.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON input
    #[error("Invalid JSON at line {line}, column {col}: {msg}")]
    Json { line: usize, col: usize, msg: String },

    /// Input bytes were not UTF-8
    #[error("Invalid UTF-8 input: {0}")]
    Utf8(String),

    /// The document has neither a `graph` nor a `graphs` member
    #[error("Document contains neither `graph` nor a non-empty `graphs` list")]
    MissingGraph,

    /// The embedded schema could not be compiled
    #[error("Schema failed to compile: {0}")]
    Schema(String),

    /// A graph document failed structural validation
    #[error("Document failed validation with {} error(s)", .0.errors.len())]
    Invalid(ValidationResult),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a JSON error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use autoon::Error;
    ///
    /// let err = Error::json(3, 7, "expected value");
    /// assert!(err.to_string().contains("line 3"));
    /// ```
    pub fn json(line: usize, col: usize, msg: &str) -> Self {
        Error::Json {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            return Error::Io(err.to_string());
        }
        // serde_json appends " at line X column Y" to Display; keep the bare message.
        let msg = err.to_string();
        let msg = msg
            .split(" at line ")
            .next()
            .map(str::to_string)
            .unwrap_or(msg);
        Error::Json {
            line: err.line(),
            col: err.column(),
            msg,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
