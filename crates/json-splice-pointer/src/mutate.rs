//! Write-path primitives: insert and delete by path.

use serde_json::{Map, Value};

use crate::types::{PathStep, PointerFlags};
use crate::{is_valid_index, parse_index, PointerError};

/// Insert `value` at `path`, creating intermediate containers as the flags
/// allow.
///
/// All steps but the last resolve to a container; the last step is the
/// insertion point. Object containers insert or overwrite the key. Array
/// containers accept an index in `[0, len]` (insert, shifting later
/// elements right) or the `-` sentinel (append). Zero steps replace the
/// root wholesale.
///
/// A missing intermediate object key is auto-vivified as an empty object
/// unless [`PointerFlags::STRICT_MODE`] is set. See
/// [`PointerFlags::TOLERATE_ASSOCIATIVE_ARRAYS`] for arrays addressed with
/// string keys.
///
/// # Errors
///
/// - `PointerError::IndexOutOfBounds` - array index past `len`, or `-` in a
///   non-final step
/// - `PointerError::IllegalInvocation` - strict mode refused to vivify
/// - `PointerError::IllegalArgument` - non-empty array addressed with a
///   string key without the tolerate flag
/// - `PointerError::NotFound` - a scalar in the way of remaining steps
pub fn add(
    root: &mut Value,
    path: &[PathStep],
    value: Value,
    flags: PointerFlags,
) -> Result<(), PointerError> {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return Ok(());
    };
    let container = descend(root, parents, flags)?;
    coerce_array_container(container, last, flags)?;
    match container {
        Value::Object(map) => {
            map.insert(last.clone(), value);
            Ok(())
        }
        Value::Array(arr) => {
            if last == "-" {
                arr.push(value);
                return Ok(());
            }
            let idx = parse_index(last)?;
            if idx > arr.len() {
                return Err(PointerError::IndexOutOfBounds);
            }
            arr.insert(idx, value);
            Ok(())
        }
        _ => Err(PointerError::NotFound),
    }
}

/// Delete and return the value at `path`.
///
/// All steps but the last resolve exactly as [`get`](crate::get); the last
/// step must name an existing object key or an array index in `[0, len)`.
/// Removing an array element shifts later elements left. Zero steps clear
/// the root, leaving `null` behind.
///
/// # Errors
///
/// - `PointerError::NotFound` - missing object key, or a scalar in the way
/// - `PointerError::IndexOutOfBounds` - non-numeric, `-`, or past-the-end
///   array step
pub fn remove(root: &mut Value, path: &[PathStep]) -> Result<Value, PointerError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(std::mem::take(root));
    };
    let container = locate(root, parents)?;
    match container {
        Value::Object(map) => map.remove(last.as_str()).ok_or(PointerError::NotFound),
        Value::Array(arr) => {
            let idx = parse_index(last)?;
            if idx >= arr.len() {
                return Err(PointerError::IndexOutOfBounds);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PointerError::NotFound),
    }
}

// Mutable descent for `add`: vivifies missing object keys per the flags.
fn descend<'a>(
    root: &'a mut Value,
    parents: &[PathStep],
    flags: PointerFlags,
) -> Result<&'a mut Value, PointerError> {
    let mut current = root;
    for step in parents {
        coerce_array_container(current, step, flags)?;
        current = match current {
            Value::Object(map) => {
                if flags.contains(PointerFlags::STRICT_MODE) && !map.contains_key(step.as_str()) {
                    return Err(PointerError::IllegalInvocation);
                }
                map.entry(step.clone())
                    .or_insert_with(|| Value::Object(Map::new()))
            }
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                arr.get_mut(idx).ok_or(PointerError::IndexOutOfBounds)?
            }
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}

// Mutable descent with the same error semantics as `get`.
fn locate<'a>(root: &'a mut Value, parents: &[PathStep]) -> Result<&'a mut Value, PointerError> {
    let mut current = root;
    for step in parents {
        current = match current {
            Value::Object(map) => map.get_mut(step.as_str()).ok_or(PointerError::NotFound)?,
            Value::Array(arr) => {
                let idx = parse_index(step)?;
                arr.get_mut(idx).ok_or(PointerError::IndexOutOfBounds)?
            }
            _ => return Err(PointerError::NotFound),
        };
    }
    Ok(current)
}

// An array must act as an object when the step is a string key: an empty
// array becomes an empty object, and with TOLERATE_ASSOCIATIVE_ARRAYS a
// populated array is rekeyed by decimal index. STRICT_MODE refuses the
// empty-array coercion.
fn coerce_array_container(
    node: &mut Value,
    step: &str,
    flags: PointerFlags,
) -> Result<(), PointerError> {
    let Value::Array(arr) = node else {
        return Ok(());
    };
    if step == "-" || is_valid_index(step) {
        return Ok(());
    }
    if arr.is_empty() {
        if flags.contains(PointerFlags::STRICT_MODE) {
            return Err(PointerError::IllegalInvocation);
        }
        *node = Value::Object(Map::new());
        return Ok(());
    }
    if !flags.contains(PointerFlags::TOLERATE_ASSOCIATIVE_ARRAYS) {
        return Err(PointerError::IllegalArgument);
    }
    let entries: Map<String, Value> = arr
        .drain(..)
        .enumerate()
        .map(|(idx, item)| (idx.to_string(), item))
        .collect();
    *node = Value::Object(entries);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_json_pointer;
    use serde_json::json;

    fn path(s: &str) -> Vec<String> {
        parse_json_pointer(s)
    }

    #[test]
    fn test_add_object_key() {
        let mut doc = json!({"a": 1});
        add(&mut doc, &path("/b"), json!(2), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_add_overwrites_existing_key() {
        let mut doc = json!({"a": 1});
        add(&mut doc, &path("/a"), json!(9), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": 9}));
    }

    #[test]
    fn test_add_array_insert_shifts_right() {
        let mut doc = json!([1, 2, 3]);
        add(&mut doc, &path("/1"), json!(99), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!([1, 99, 2, 3]));
    }

    #[test]
    fn test_add_array_at_len_appends() {
        let mut doc = json!([1, 2]);
        add(&mut doc, &path("/2"), json!(3), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_add_array_dash_appends() {
        let mut doc = json!({"a": [1, 2, 3]});
        add(&mut doc, &path("/a/-"), json!(4), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": [1, 2, 3, 4]}));
    }

    #[test]
    fn test_add_array_past_len() {
        let mut doc = json!([1, 2]);
        let result = add(&mut doc, &path("/3"), json!(9), PointerFlags::NONE);
        assert_eq!(result, Err(PointerError::IndexOutOfBounds));
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn test_add_dash_not_last_step() {
        let mut doc = json!({"a": [[1], [2]]});
        let result = add(&mut doc, &path("/a/-/0"), json!(9), PointerFlags::NONE);
        assert_eq!(result, Err(PointerError::IndexOutOfBounds));
    }

    #[test]
    fn test_add_replaces_root() {
        let mut doc = json!({"a": 1});
        add(&mut doc, &[], json!([1, 2]), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!([1, 2]));
    }

    #[test]
    fn test_add_vivifies_missing_keys() {
        let mut doc = json!({});
        add(&mut doc, &path("/a/b"), json!(1), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_add_vivifies_deep_chain() {
        let mut doc = json!({});
        add(&mut doc, &path("/a/b/c"), json!(null), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": {"b": {"c": null}}}));
    }

    #[test]
    fn test_add_strict_mode_refuses_vivification() {
        let mut doc = json!({});
        let result = add(&mut doc, &path("/a/b"), json!(1), PointerFlags::STRICT_MODE);
        assert_eq!(result, Err(PointerError::IllegalInvocation));
        assert_eq!(doc, json!({}));
    }

    #[test]
    fn test_add_empty_array_acts_as_object() {
        let mut doc = json!({"a": []});
        add(&mut doc, &path("/a/b"), json!(1), PointerFlags::NONE).unwrap();
        assert_eq!(doc, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_add_empty_array_strict_mode() {
        let mut doc = json!({"a": []});
        let result = add(&mut doc, &path("/a/b"), json!(1), PointerFlags::STRICT_MODE);
        assert_eq!(result, Err(PointerError::IllegalInvocation));
        assert_eq!(doc, json!({"a": []}));
    }

    #[test]
    fn test_add_populated_array_with_string_key() {
        let mut doc = json!({"a": [10, 20]});
        let result = add(&mut doc, &path("/a/x"), json!(1), PointerFlags::NONE);
        assert_eq!(result, Err(PointerError::IllegalArgument));
    }

    #[test]
    fn test_add_tolerate_associative_arrays() {
        let mut doc = json!({"a": [10, 20]});
        add(
            &mut doc,
            &path("/a/x"),
            json!(1),
            PointerFlags::TOLERATE_ASSOCIATIVE_ARRAYS,
        )
        .unwrap();
        assert_eq!(doc, json!({"a": {"0": 10, "1": 20, "x": 1}}));
    }

    #[test]
    fn test_add_through_scalar() {
        let mut doc = json!({"a": 1});
        let result = add(&mut doc, &path("/a/b/c"), json!(1), PointerFlags::NONE);
        assert_eq!(result, Err(PointerError::NotFound));
    }

    #[test]
    fn test_remove_object_key() {
        let mut doc = json!({"a": 1, "b": 2});
        assert_eq!(remove(&mut doc, &path("/a")), Ok(json!(1)));
        assert_eq!(doc, json!({"b": 2}));
    }

    #[test]
    fn test_remove_missing_key() {
        let mut doc = json!({"a": 1});
        assert_eq!(remove(&mut doc, &path("/b")), Err(PointerError::NotFound));
        assert_eq!(doc, json!({"a": 1}));
    }

    #[test]
    fn test_remove_array_element_shifts_left() {
        let mut doc = json!([1, 2, 3]);
        assert_eq!(remove(&mut doc, &path("/1")), Ok(json!(2)));
        assert_eq!(doc, json!([1, 3]));
    }

    #[test]
    fn test_remove_array_bounds() {
        let mut doc = json!([1, 2, 3]);
        assert_eq!(
            remove(&mut doc, &path("/3")),
            Err(PointerError::IndexOutOfBounds)
        );
        assert_eq!(
            remove(&mut doc, &path("/-")),
            Err(PointerError::IndexOutOfBounds)
        );
        assert_eq!(doc, json!([1, 2, 3]));
    }

    #[test]
    fn test_remove_root_clears() {
        let mut doc = json!({"a": 1});
        assert_eq!(remove(&mut doc, &[]), Ok(json!({"a": 1})));
        assert_eq!(doc, Value::Null);
    }

    #[test]
    fn test_add_then_get_roundtrip() {
        let mut doc = json!({"a": {"b": [1, 2]}});
        let p = path("/a/b/1");
        add(&mut doc, &p, json!("x"), PointerFlags::NONE).unwrap();
        assert_eq!(crate::get(&doc, &p), Ok(&json!("x")));
    }

    #[test]
    fn test_append_then_get_at_concrete_index() {
        let mut doc = json!([1, 2]);
        add(&mut doc, &path("/-"), json!(3), PointerFlags::NONE).unwrap();
        // `-` resolved to index 2; reads must use the concrete index.
        assert_eq!(crate::get(&doc, &path("/2")), Ok(&json!(3)));
        assert_eq!(
            crate::get(&doc, &path("/-")),
            Err(PointerError::IndexOutOfBounds)
        );
    }
}
