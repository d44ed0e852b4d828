//! Raw patch document validation.
//!
//! Validates untyped operation records before import, so untrusted input
//! can be rejected early with an error naming the failing entry. Import via
//! [`Patch::from_json`](crate::Patch::from_json) checks field presence on
//! its own; this layer additionally checks pointer syntax and record shape.

use json_splice_pointer::validate_json_pointer;
use serde_json::{Map, Value};

/// Error returned by validation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

fn err(msg: &str) -> ValidationError {
    ValidationError(msg.to_string())
}

/// Validate a whole patch document.
///
/// Errors include the index of the failing operation:
/// `"Error in operation [index = N] (reason)."`.
pub fn validate_operations(ops: &Value) -> Result<(), ValidationError> {
    let arr = ops.as_array().ok_or_else(|| err("Not an array."))?;
    if arr.is_empty() {
        return Err(err("Empty operation patch."));
    }
    for (i, op) in arr.iter().enumerate() {
        validate_operation(op).map_err(|e| {
            ValidationError(format!("Error in operation [index = {}] ({}).", i, e.0))
        })?;
    }
    Ok(())
}

/// Validate a single operation record.
pub fn validate_operation(op: &Value) -> Result<(), ValidationError> {
    let map = op.as_object().ok_or_else(|| err("OP_INVALID"))?;

    let path = map.get("path").ok_or_else(|| err("OP_PATH_INVALID"))?;
    let path_str = path.as_str().ok_or_else(|| err("OP_PATH_INVALID"))?;
    validate_pointer_str(path_str)?;

    let op_name = map.get("op").and_then(|v| v.as_str()).unwrap_or("");
    match op_name {
        "add" | "replace" | "test" => validate_has_value(map),
        "remove" => Ok(()),
        "copy" => validate_from(map),
        "move" => {
            validate_from(map)?;
            let from_str = map.get("from").and_then(|v| v.as_str()).unwrap_or("");
            let prefix = format!("{}/", from_str);
            if path_str.starts_with(&prefix) {
                return Err(err("Cannot move into own children."));
            }
            Ok(())
        }
        _ => Err(err("OP_UNKNOWN")),
    }
}

// ── Field validators ──────────────────────────────────────────────────────

fn validate_has_value(map: &Map<String, Value>) -> Result<(), ValidationError> {
    if !map.contains_key("value") {
        return Err(err("OP_VALUE_MISSING"));
    }
    Ok(())
}

fn validate_from(map: &Map<String, Value>) -> Result<(), ValidationError> {
    let from = map.get("from").ok_or_else(|| err("OP_FROM_INVALID"))?;
    let from_str = from.as_str().ok_or_else(|| err("OP_FROM_INVALID"))?;
    validate_pointer_str(from_str)
}

fn validate_pointer_str(s: &str) -> Result<(), ValidationError> {
    validate_json_pointer(s).map_err(|e| err(&e.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────
