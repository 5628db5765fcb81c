//! Configuration options for encoding and decoding.
//!
//! The notation itself is fixed (comma delimiter, two-space rows, fixed field
//! orders). What can be tuned is the shape of the output around it and the
//! fallback used when decoding input that lacks a graph header.
//!
//! ## Examples
//!
//! ```rust
//! use autoon::{encode_with_options, CodecOptions, Document, Graph, GraphType};
//!
//! let doc = Document::new(Graph::new(GraphType::Workflow).with_id("flow"));
//!
//! let options = CodecOptions::new().with_trailing_newline(true);
//! let text = encode_with_options(&doc, &options).unwrap();
//! assert!(text.ends_with('\n'));
//! ```

use crate::GraphType;

/// Options shared by the section writer and the section parser.
///
/// # Examples
///
/// ```rust
/// use autoon::{CodecOptions, GraphType};
///
/// let options = CodecOptions::new()
///     .with_metadata(false)
///     .with_default_graph_type(GraphType::Process);
///
/// assert!(!options.include_metadata);
/// assert_eq!(options.default_graph_type, GraphType::Process);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CodecOptions {
    /// Emit the `metadata:` block when the graph has metadata.
    pub include_metadata: bool,
    /// End encoded output with a newline.
    pub trailing_newline: bool,
    /// Graph type used when decoded input has no graph header row.
    pub default_graph_type: GraphType,
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions {
            include_metadata: true,
            trailing_newline: false,
            default_graph_type: GraphType::Class,
        }
    }
}

impl CodecOptions {
    /// Creates default options: metadata on, no trailing newline, `class` fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_metadata(mut self, include: bool) -> Self {
        self.include_metadata = include;
        self
    }

    /// Files written by the CLI end with a newline; in-memory conversions don't.
    #[must_use]
    pub fn with_trailing_newline(mut self, trailing: bool) -> Self {
        self.trailing_newline = trailing;
        self
    }

    #[must_use]
    pub fn with_default_graph_type(mut self, graph_type: GraphType) -> Self {
        self.default_graph_type = graph_type;
        self
    }
}
