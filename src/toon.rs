//! Generic tabular-notation encoder for arbitrary JSON.
//!
//! Graph documents have their own fixed layout (see [`crate::ser`]). Any other
//! JSON payload handed to the converter is written in the general notation:
//!
//! - objects become `key: value` lines, nested objects indented two spaces
//! - arrays of primitives are inline: `tags[3]: a,b,c`
//! - arrays of objects with identical keys and primitive values are tables:
//!   `users[2]{id,name}:` followed by one row per object
//! - any other array is a list of `- ` items
//!
//! ```rust
//! use autoon::toon::encode_json;
//! use serde_json::json;
//!
//! let text = encode_json(&json!({
//!     "name": "demo",
//!     "users": [{"id": 1, "name": "Ada"}, {"id": 2, "name": "Linus"}]
//! }));
//! assert_eq!(text, "name: demo\nusers[2]{id,name}:\n  1,Ada\n  2,Linus");
//! ```

use crate::row::INDENT;
use serde_json::{Map, Value};

/// Encodes any JSON value in the general notation.
#[must_use]
pub fn encode_json(value: &Value) -> String {
    let mut output = String::with_capacity(256);
    match value {
        Value::Object(map) => write_object(&mut output, map, 0),
        Value::Array(items) => write_array(&mut output, items, 0),
        _ => write_primitive(&mut output, value),
    }
    output
}

fn push_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str(INDENT);
    }
}

fn write_object(output: &mut String, map: &Map<String, Value>, level: usize) {
    for (i, (key, value)) in map.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        push_indent(output, level);
        write_field(output, key, value, level);
    }
}

/// Writes `key: value` starting at the current position. Nested lines are
/// indented one level deeper than `level`.
fn write_field(output: &mut String, key: &str, value: &Value, level: usize) {
    write_string(output, key);
    match value {
        Value::Array(items) => write_array(output, items, level),
        Value::Object(map) => {
            output.push(':');
            if !map.is_empty() {
                output.push('\n');
                write_object(output, map, level + 1);
            }
        }
        _ => {
            output.push_str(": ");
            write_primitive(output, value);
        }
    }
}

/// Writes an array header and its body. Rows and items go one level below `level`.
fn write_array(output: &mut String, items: &[Value], level: usize) {
    if items.is_empty() {
        output.push_str("[0]:");
        return;
    }

    if let Some(fields) = table_fields(items) {
        output.push_str(&format!("[{}]{{", items.len()));
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            write_string(output, field);
        }
        output.push_str("}:");

        for item in items {
            output.push('\n');
            push_indent(output, level + 1);
            if let Value::Object(map) = item {
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        output.push(',');
                    }
                    write_primitive(output, map.get(*field).unwrap_or(&Value::Null));
                }
            }
        }
    } else if items.iter().all(is_primitive) {
        output.push_str(&format!("[{}]: ", items.len()));
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                output.push(',');
            }
            write_primitive(output, item);
        }
    } else {
        output.push_str(&format!("[{}]:", items.len()));
        for item in items {
            output.push('\n');
            push_indent(output, level + 1);
            write_list_item(output, item, level + 1);
        }
    }
}

fn write_list_item(output: &mut String, item: &Value, level: usize) {
    match item {
        Value::Object(map) if !map.is_empty() => {
            output.push_str("- ");
            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    output.push('\n');
                    push_indent(output, level + 1);
                }
                write_field(output, key, value, level + 1);
            }
        }
        Value::Object(_) => output.push('-'),
        Value::Array(items) => {
            output.push_str("- ");
            write_array(output, items, level);
        }
        _ => {
            output.push_str("- ");
            write_primitive(output, item);
        }
    }
}

/// Field names when every element is an object with the same keys and only
/// primitive values.
fn table_fields(items: &[Value]) -> Option<Vec<&String>> {
    let first = items.first()?.as_object()?;
    if first.is_empty() {
        return None;
    }
    let fields: Vec<&String> = first.keys().collect();

    for item in items {
        let map = item.as_object()?;
        if map.len() != fields.len() || !fields.iter().all(|f| map.contains_key(*f)) {
            return None;
        }
        if !map.values().all(is_primitive) {
            return None;
        }
    }

    Some(fields)
}

#[inline]
fn is_primitive(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn write_primitive(output: &mut String, value: &Value) {
    match value {
        Value::Null => output.push_str("null"),
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::String(s) => write_string(output, s),
        // Callers only pass primitives; fall back to compact JSON.
        Value::Array(_) | Value::Object(_) => output.push_str(&value.to_string()),
    }
}

fn write_string(output: &mut String, s: &str) {
    if !needs_quotes(s) {
        output.push_str(s);
        return;
    }
    output.push('"');
    for ch in s.chars() {
        match ch {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            '\u{0008}' => output.push_str("\\b"),
            '\u{000C}' => output.push_str("\\f"),
            '\0' => output.push_str("\\0"),
            _ => output.push(ch),
        }
    }
    output.push('"');
}

/// Returns `true` when a string would be misread if written bare.
pub fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.starts_with(' ') || s.ends_with(' ') {
        return true;
    }

    if s.contains([':', ',', '"', '\\', '\n', '\r', '\t', '\0']) {
        return true;
    }

    if matches!(s, "true" | "false" | "null") || s.parse::<f64>().is_ok() {
        return true;
    }

    s.starts_with("- ")
        || (s.starts_with('[') && s.contains(']'))
        || (s.starts_with('{') && s.contains('}'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_object() {
        let text = encode_json(&json!({"name": "Alice", "age": 30, "active": true, "pet": null}));
        assert_eq!(text, "name: Alice\nage: 30\nactive: true\npet: null");
    }

    #[test]
    fn test_nested_object() {
        let text = encode_json(&json!({"server": {"host": "localhost", "tls": {"on": false}}, "empty": {}}));
        assert_eq!(
            text,
            "server:\n  host: localhost\n  tls:\n    on: false\nempty:"
        );
    }

    #[test]
    fn test_inline_array() {
        assert_eq!(encode_json(&json!({"tags": ["a", "b", "c"]})), "tags[3]: a,b,c");
        assert_eq!(encode_json(&json!({"none": []})), "none[0]:");
        assert_eq!(encode_json(&json!([1, 2])), "[2]: 1,2");
    }

    #[test]
    fn test_uneven_objects_become_list() {
        let text = encode_json(&json!({"items": [{"a": 1}, {"b": 2, "c": [1, 2]}]}));
        assert_eq!(text, "items[2]:\n  - a: 1\n  - b: 2\n    c[2]: 1,2");
    }

    #[test]
    fn test_mixed_list() {
        let text = encode_json(&json!([1, [2, 3], {}]));
        assert_eq!(text, "[3]:\n  - 1\n  - [2]: 2,3\n  -");
    }

    #[test]
    fn test_table_inside_nested_object() {
        let text = encode_json(&json!({"db": {"rows": [{"k": "x", "v": 1}, {"k": "y", "v": 2}]}}));
        assert_eq!(text, "db:\n  rows[2]{k,v}:\n    x,1\n    y,2");
    }

    #[test]
    fn test_ambiguous_strings_are_quoted() {
        assert!(needs_quotes(""));
        assert!(needs_quotes("true"));
        assert!(needs_quotes("42"));
        assert!(needs_quotes("a,b"));
        assert!(needs_quotes("key: value"));
        assert!(needs_quotes(" padded"));
        assert!(needs_quotes("- item"));
        assert!(needs_quotes("[1]"));
        assert!(!needs_quotes("hello world"));

        assert_eq!(encode_json(&json!({"s": "say \"hi\""})), "s: \"say \\\"hi\\\"\"");
    }
}
