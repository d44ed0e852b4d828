//! Structural difference count between two values.
//!
//! The patch engine's `test` verb consumes exactly one thing from this
//! module: a difference count with an early-exit mode.

use serde_json::{Map, Value};

/// Count structural differences between `expected` and `actual`.
///
/// Scalars and mismatched kinds count one difference. Objects count keys
/// present on only one side and recurse into common keys; arrays recurse
/// over the common prefix and count the length delta. With `stop_at_first`
/// the walk returns as soon as the count is known to be non-zero.
pub fn diff_count(expected: &Value, actual: &Value, stop_at_first: bool) -> usize {
    let mut count = 0;
    diff_value(&mut count, expected, actual, stop_at_first);
    count
}

fn diff_value(count: &mut usize, expected: &Value, actual: &Value, stop: bool) {
    if stop && *count > 0 {
        return;
    }
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => diff_object(count, exp, act, stop),
        (Value::Array(exp), Value::Array(act)) => diff_array(count, exp, act, stop),
        _ => {
            if expected != actual {
                *count += 1;
            }
        }
    }
}

fn diff_object(
    count: &mut usize,
    expected: &Map<String, Value>,
    actual: &Map<String, Value>,
    stop: bool,
) {
    for key in expected.keys() {
        if stop && *count > 0 {
            return;
        }
        if !actual.contains_key(key) {
            *count += 1;
        }
    }
    for (key, act_val) in actual {
        if stop && *count > 0 {
            return;
        }
        match expected.get(key) {
            None => *count += 1,
            Some(exp_val) => diff_value(count, exp_val, act_val, stop),
        }
    }
}

fn diff_array(count: &mut usize, expected: &[Value], actual: &[Value], stop: bool) {
    let common = expected.len().min(actual.len());
    for i in 0..common {
        if stop && *count > 0 {
            return;
        }
        diff_value(count, &expected[i], &actual[i], stop);
    }
    if stop && *count > 0 {
        return;
    }
    *count += expected.len().abs_diff(actual.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equal_values_count_zero() {
        let v = json!({"a": [1, {"b": null}], "c": "x"});
        assert_eq!(diff_count(&v, &v.clone(), false), 0);
        assert_eq!(diff_count(&v, &v.clone(), true), 0);
    }

    #[test]
    fn scalar_mismatch_counts_one() {
        assert_eq!(diff_count(&json!(1), &json!(2), false), 1);
        assert_eq!(diff_count(&json!(null), &json!(false), false), 1);
        assert_eq!(diff_count(&json!("a"), &json!(["a"]), false), 1);
    }

    #[test]
    fn object_counts_per_key() {
        let expected = json!({"a": 1, "b": 2, "c": 3});
        let actual = json!({"a": 1, "b": 99, "d": 4});
        // b differs, c removed, d added
        assert_eq!(diff_count(&expected, &actual, false), 3);
    }

    #[test]
    fn array_counts_elements_and_length_delta() {
        let expected = json!([1, 2, 3]);
        let actual = json!([1, 9]);
        // index 1 differs, one element missing
        assert_eq!(diff_count(&expected, &actual, false), 2);
    }

    #[test]
    fn nested_differences_accumulate() {
        let expected = json!({"a": {"b": [1, 2]}, "x": 1});
        let actual = json!({"a": {"b": [1, 3]}, "x": 2});
        assert_eq!(diff_count(&expected, &actual, false), 2);
    }

    #[test]
    fn stop_at_first_short_circuits_to_nonzero() {
        let expected = json!({"a": 1, "b": 2, "c": 3});
        let actual = json!({"x": 1, "y": 2, "z": 3});
        let full = diff_count(&expected, &actual, false);
        assert!(full > 1);
        assert_eq!(diff_count(&expected, &actual, true), 1);
    }
}
