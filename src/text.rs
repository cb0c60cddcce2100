//! Stateless text helpers used by the importer and the mutator

use crate::model::Value;

/// Strip leading and trailing whitespace, returning an owned copy
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Parse the whole token as a base-10 integer
pub fn classify_integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

/// Parse the whole token as a float; the token must contain a decimal point
pub fn classify_float(s: &str) -> Option<f64> {
    if !s.contains('.') {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Classify a token into a typed value.
///
/// Float is tried first so `"3.0"` stays a float, then Integer, then Text.
/// The token is trimmed before classification.
pub fn classify(token: &str) -> Value {
    let trimmed = token.trim();

    if let Some(f) = classify_float(trimmed) {
        return Value::Float(f);
    }

    if let Some(i) = classify_integer(trimmed) {
        return Value::Integer(i);
    }

    Value::Text(trimmed.to_string())
}

/// Count delimiter-separated tokens in a line.
///
/// Every delimiter occurrence separates two tokens, so empty tokens count.
pub fn count_tokens(line: &str, delimiter: u8) -> usize {
    let delimiter = char::from(delimiter);
    let line = strip_line_ending(line);
    line.matches(delimiter).count() + 1
}

/// Split a line into trimmed tokens
pub fn split_tokens(line: &str, delimiter: u8) -> Vec<String> {
    strip_line_ending(line)
        .split(char::from(delimiter))
        .map(trim)
        .collect()
}

/// Whether a line still contains `\n` or `\r` once its terminator is stripped
pub fn has_embedded_line_break(line: &str) -> bool {
    strip_line_ending(line).contains(&['\n', '\r'][..])
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(&['\n', '\r'][..])
}
