//! Defensive access to loosely-structured JSON documents.
//!
//! The API does not promise a schema, so every read goes through these helpers:
//! a missing key, a null, or a value of the wrong shape yields `None` (or the
//! caller's default) instead of an error.

use serde_json::Value;

/// Follows `path` through nested objects.
///
/// Returns `None` as soon as a segment is missing or the current value is not an
/// object. An empty path returns `value` itself.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(value, |current, key| current.as_object()?.get(*key))
}

/// Array at `path`, or an empty slice.
pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> &'a [Value] {
    lookup(value, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Renders the scalar at `path` for display, falling back to `default`.
///
/// Strings are shown without quotes, numbers and booleans as written. Null,
/// arrays and objects count as missing.
pub fn display_at(value: &Value, path: &[&str], default: &str) -> String {
    lookup(value, path)
        .and_then(display_scalar)
        .unwrap_or_else(|| default.to_string())
}

/// Text form of a scalar value, `None` for anything else.
pub fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Interprets the value at `path` as an integer.
///
/// Accepts integers, floats (truncated toward zero) and strings holding either.
pub fn integer_at(value: &Value, path: &[&str]) -> Option<i64> {
    match lookup(value, path)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}
