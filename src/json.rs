//! Tolerant navigation of upstream JSON.

use serde_json::Value;

/// Follow `path` through nested objects.
///
/// Returns `None` as soon as a level is missing or is not an object.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Like [`lookup`], but only yields string leaves.
pub fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path).and_then(Value::as_str)
}

/// Like [`lookup`], but only yields array leaves.
pub fn lookup_array<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    lookup(value, path).and_then(Value::as_array)
}
