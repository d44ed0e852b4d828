use serde_json::Value;

use crate::types::PathStep;
use crate::{parse_index, PointerError};

/// Resolve a path to a value reference.
///
/// Traversal is read-only. An object step must name an existing key, an
/// array step must be a decimal index inside the array, and the `-` append
/// sentinel is never valid on a read. Zero steps resolve to the root.
///
/// # Errors
///
/// - `PointerError::NotFound` - missing object key, or a scalar reached
///   with steps remaining
/// - `PointerError::IndexOutOfBounds` - non-numeric, `-`, or past-the-end
///   array step
pub fn get<'a>(root: &'a Value, path: &[PathStep]) -> Result<&'a Value, PointerError> {
    let mut current = root;
    for step in path {
        current = match current {
            Value::Object(map) => map.get(step.as_str()).ok_or(PointerError::NotFound)?,
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                arr.get(idx).ok_or(PointerError::IndexOutOfBounds)?
            }
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}
