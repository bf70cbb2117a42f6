//! Pure helper functions for extracting typed parameters from a `serde_json::Value` object.
//!
//! Each helper takes a JSON value, a key name, and a default. If the key is
//! missing or the value is not the expected type, the default is returned.

use serde_json::Value;

/// Extracts a `usize` from `params[name]`, returning `default` if missing or wrong type.
///
/// Only succeeds if the JSON value is a non-negative integer that fits in `u64`,
/// then converts to `usize`.
pub fn param_usize(params: &Value, name: &str, default: usize) -> usize {
    params
        .get(name)
        .and_then(Value::as_u64)
        .map(|v| v as usize)
        .unwrap_or(default)
}

/// Extracts an optional `u64` from `params[name]`.
///
/// Returns `None` when the key is missing, `null`, or not a non-negative integer.
pub fn param_u64_opt(params: &Value, name: &str) -> Option<u64> {
    params.get(name).and_then(Value::as_u64)
}
