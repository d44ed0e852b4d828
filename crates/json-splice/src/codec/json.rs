//! JSON codec for patch operations.
//!
//! Converts operations to and from their untyped RFC 6902 record form:
//! `{op, path, value?, from?}`.

use serde_json::{json, Map, Value};

use json_splice_pointer::{format_json_pointer, parse_json_pointer};

use crate::types::{ImportError, Op, Path};

// ── Deserialization ───────────────────────────────────────────────────────

fn required_pointer(
    record: &Map<String, Value>,
    field: &'static str,
) -> Result<Path, ImportError> {
    let raw = record.get(field).ok_or(ImportError::MissingField(field))?;
    let s = raw.as_str().ok_or(ImportError::InvalidField(field))?;
    Ok(parse_json_pointer(s))
}

fn required_value(record: &Map<String, Value>) -> Result<Value, ImportError> {
    // Presence is what matters: an explicit null payload is legal.
    record
        .get("value")
        .cloned()
        .ok_or(ImportError::MissingField("value"))
}

/// Decode a single untyped record into an [`Op`].
pub fn from_json(record: &Value) -> Result<Op, ImportError> {
    let record = record.as_object().ok_or(ImportError::NotAnOperation)?;
    let op_name = record
        .get("op")
        .ok_or(ImportError::MissingField("op"))?
        .as_str()
        .ok_or(ImportError::InvalidField("op"))?;
    let path = required_pointer(record, "path")?;
    match op_name {
        "add" => Ok(Op::Add {
            path,
            value: required_value(record)?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: required_value(record)?,
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: required_pointer(record, "from")?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: required_pointer(record, "from")?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: required_value(record)?,
        }),
        other => Err(ImportError::UnknownOperation(other.to_string())),
    }
}

/// Decode an untyped operation list.
pub fn from_json_patch(doc: &Value) -> Result<Vec<Op>, ImportError> {
    let arr = doc.as_array().ok_or(ImportError::NotAnOperation)?;
    arr.iter().map(from_json).collect()
}

// ── Serialization ─────────────────────────────────────────────────────────

fn encode_pointer(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

/// Encode an [`Op`] as its untyped record form.
///
/// Exactly the fields the decoder requires are emitted, nothing else.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_pointer(path),
            "value": value
        }),
        Op::Remove { path } => json!({
            "op": "remove",
            "path": encode_pointer(path)
        }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_pointer(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_pointer(path),
            "from": encode_pointer(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_pointer(path),
            "from": encode_pointer(from)
        }),
        Op::Test { path, value } => json!({
            "op": "test",
            "path": encode_pointer(path),
            "value": value
        }),
    }
}

/// Encode a list of operations as a JSON array of records.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}
