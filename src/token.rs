//! Value Codec: single values to and from their token text.
//!
//! A token is the text of one cell between commas. Encoding only quotes when it
//! has to: strings carrying a comma, a double quote or a newline are wrapped in
//! double quotes with inner quotes doubled. Everything else is written bare.
//!
//! Decoding is the inverse, with one known ambiguity: a bare token that parses as
//! a number (or reads `true`/`false`) becomes a number (or a boolean) even when
//! the producer meant a string, so `007` comes back as `7`. Quoted tokens are
//! always strings.
//!
//! ```rust
//! use autoon::token::{decode_token, encode_token};
//! use autoon::Value;
//!
//! assert_eq!(encode_token(&Value::from("a,b")), "\"a,b\"");
//! assert_eq!(decode_token("\"a,b\""), Value::from("a,b"));
//! assert_eq!(decode_token("42"), Value::from(42));
//! assert_eq!(decode_token(""), Value::Null);
//! ```

use crate::{Number, Value};
use std::borrow::Cow;

/// Returns `true` when a string must be quoted to survive row splitting.
#[inline]
pub fn needs_quotes(s: &str) -> bool {
    s.contains(',') || s.contains('"') || s.contains('\n')
}

/// Quotes and escapes a string if needed; borrows it unchanged otherwise.
pub fn escape(s: &str) -> Cow<'_, str> {
    if needs_quotes(s) {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('"');
        for ch in s.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
        Cow::Owned(out)
    } else {
        Cow::Borrowed(s)
    }
}

/// Appends the token form of `value` to `output`. `Null` writes nothing.
pub fn write_token(output: &mut String, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => output.push_str(&n.to_string()),
        Value::String(s) => output.push_str(&escape(s)),
        Value::List(_) | Value::Object(_) => output.push_str(&escape(&value.text())),
    }
}

/// Encodes one value as a token.
#[must_use]
pub fn encode_token(value: &Value) -> String {
    let mut output = String::new();
    write_token(&mut output, value);
    output
}

/// Decodes one token.
///
/// Surrounding whitespace is ignored. Empty tokens decode to [`Value::Null`].
#[must_use]
pub fn decode_token(token: &str) -> Value {
    let token = token.trim();

    if token.starts_with('"') {
        return Value::String(unquote(token));
    }

    match token {
        "" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        _ => match parse_number(token) {
            Some(n) => Value::Number(n),
            None => Value::String(token.to_string()),
        },
    }
}

/// Strips the outer quotes of a token and collapses doubled quotes.
///
/// Tokens that are not quoted come back trimmed but otherwise untouched. A token
/// with an opening quote but no closing one is unquoted as far as it goes.
#[must_use]
pub fn unquote(token: &str) -> String {
    let token = token.trim();
    let Some(inner) = token.strip_prefix('"') else {
        return token.to_string();
    };
    let inner = inner.strip_suffix('"').unwrap_or(inner);
    inner.replace("\"\"", "\"")
}

/// Parses a finite number. Integral text that fits `i64` stays an integer.
pub(crate) fn parse_number(s: &str) -> Option<Number> {
    // f64::from_str also accepts "inf", "infinity" and "nan"; those stay strings.
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(Number::Integer(i));
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(Number::Float(f)),
        _ => None,
    }
}
