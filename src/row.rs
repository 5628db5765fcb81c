//! Tabular Row Codec.
//!
//! A row is one indented line under a section header. Its cells are matched to
//! the header's field list by position:
//!
//! ```text
//! nodes[2]{id,label,type}:
//!   User,User,class
//!   login,"login(user, password)",method
//! ```
//!
//! Splitting is quote-aware and never fails. Malformed quoting degrades to a
//! best-effort split; short rows leave trailing fields `Null`.

use crate::token::{decode_token, write_token};
use crate::Value;
use indexmap::IndexMap;

/// Fixed indent in front of every data row.
pub const INDENT: &str = "  ";

/// Field values of a single row, in field-list order.
pub type Row = IndexMap<String, Value>;

/// Encodes a row: each field's value in declared order, comma-joined, indented.
///
/// Fields missing from `row` are written as empty tokens.
///
/// # Examples
///
/// ```rust
/// use autoon::row::{encode_row, Row};
/// use autoon::Value;
///
/// let mut row = Row::new();
/// row.insert("source".to_string(), Value::from("A"));
/// row.insert("target".to_string(), Value::from("B"));
///
/// assert_eq!(encode_row(&["source", "target", "label"], &row), "  A,B,");
/// ```
pub fn encode_row<S: AsRef<str>>(fields: &[S], row: &Row) -> String {
    let mut line = String::with_capacity(INDENT.len() + fields.len() * 8);
    line.push_str(INDENT);
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            line.push(',');
        }
        if let Some(value) = row.get(field.as_ref()) {
            write_token(&mut line, value);
        }
    }
    line
}

/// Decodes a row against a field list.
///
/// Every field gets an entry; cells beyond the field list are ignored.
///
/// # Examples
///
/// ```rust
/// use autoon::row::decode_row;
/// use autoon::Value;
///
/// let row = decode_row("  A,\"Hello, world\"", &["id", "label", "type"]);
/// assert_eq!(row["label"], Value::from("Hello, world"));
/// assert_eq!(row["type"], Value::Null);
/// ```
pub fn decode_row<S: AsRef<str>>(line: &str, fields: &[S]) -> Row {
    let data = line.strip_prefix(INDENT).unwrap_or(line);
    let tokens = split_row(data);

    if tokens.len() > fields.len() {
        tracing::trace!(
            cells = tokens.len(),
            fields = fields.len(),
            "ignoring surplus row cells"
        );
    }

    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let value = tokens.get(i).map_or(Value::Null, |t| decode_token(t));
            (field.as_ref().to_string(), value)
        })
        .collect()
}

/// Splits a line on commas outside double quotes.
///
/// The returned slices are trimmed but keep their quotes, so the Value Codec can
/// tell a quoted `"42"` from a bare `42`. Inside quotes, `""` is a literal quote.
pub fn split_row(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut chars = line.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                tokens.push(line[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    tokens.push(line[start..].trim());
    tokens
}

/// Returns `true` when `text` ends inside a quoted cell that is still open.
///
/// Only a cell that *starts* with a quote counts; a stray quote in the middle of
/// a bare cell never makes the parser swallow following lines.
pub(crate) fn ends_inside_quotes(text: &str) -> bool {
    let mut in_quotes = false;
    let mut cell_start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some((_, '"'))) {
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => cell_start = i + 1,
            _ => {}
        }
    }

    in_quotes && text[cell_start..].trim_start().starts_with('"')
}
