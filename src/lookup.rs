//! Missing-tolerant traversal of untyped JSON responses.
//!
//! Every optional field of a feed response is read through [`lookup`], which
//! walks a path of object keys and array indices and yields `None` as soon as
//! a step is absent or the value at that step has the wrong shape. It never
//! panics and never returns an error.

use serde_json::Value;

/// One step of a path into a JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seg<'a> {
    /// Field of a JSON object.
    Key(&'a str),
    /// Element of a JSON array.
    Index(usize),
}

/// Follows `path` through `root`, returning the value at the end of it.
pub fn lookup<'v>(root: &'v Value, path: &[Seg<'_>]) -> Option<&'v Value> {
    path.iter().try_fold(root, |cur, seg| match (seg, cur) {
        (Seg::Key(k), Value::Object(map)) => map.get(*k),
        (Seg::Index(i), Value::Array(items)) => items.get(*i),
        _ => None,
    })
}

/// Coerces a JSON value to a finite number.
///
/// Numbers and numeric strings are accepted; placeholders like `"-"`, null,
/// booleans and containers are not.
pub fn as_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Reads a number at `path`, treating anything unusable as missing.
pub fn number_at(root: &Value, path: &[Seg<'_>]) -> Option<f64> {
    lookup(root, path).and_then(as_number)
}

/// Reads a string at `path`. Non-string values are missing.
pub fn string_at(root: &Value, path: &[Seg<'_>]) -> Option<String> {
    lookup(root, path)
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::Seg::{Index, Key};
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_nested_keys() {
        let v = json!({"time": {"s": "2024-05-01 10:00:00"}});
        assert_eq!(
            lookup(&v, &[Key("time"), Key("s")]),
            Some(&json!("2024-05-01 10:00:00"))
        );
    }

    #[test]
    fn test_lookup_missing_intermediate() {
        let v = json!({"city": {}});
        assert_eq!(lookup(&v, &[Key("city"), Key("geo"), Index(0)]), None);
        assert_eq!(lookup(&v, &[Key("nope"), Key("deeper")]), None);
    }

    #[test]
    fn test_lookup_wrong_shape_is_missing() {
        let v = json!({"time": "not an object", "list": [1, 2]});
        assert_eq!(lookup(&v, &[Key("time"), Key("s")]), None);
        assert_eq!(lookup(&v, &[Key("list"), Key("key")]), None);
        assert_eq!(lookup(&v, &[Key("list"), Index(5)]), None);
    }

    #[test]
    fn test_lookup_array_index() {
        let v = json!({"attributions": [{"name": "EPA"}, {"name": "WAQI"}]});
        assert_eq!(
            string_at(&v, &[Key("attributions"), Index(1), Key("name")]),
            Some("WAQI".to_string())
        );
    }

    #[test]
    fn test_empty_path_returns_root() {
        let v = json!(7);
        assert_eq!(lookup(&v, &[]), Some(&v));
    }

    #[test]
    fn test_as_number() {
        assert_eq!(as_number(&json!(42)), Some(42.0));
        assert_eq!(as_number(&json!(12.5)), Some(12.5));
        assert_eq!(as_number(&json!(" 17 ")), Some(17.0));
        assert_eq!(as_number(&json!("-")), None);
        assert_eq!(as_number(&json!("")), None);
        assert_eq!(as_number(&json!("NaN")), None);
        assert_eq!(as_number(&json!(null)), None);
        assert_eq!(as_number(&json!(true)), None);
        assert_eq!(as_number(&json!([1])), None);
    }

    #[test]
    fn test_string_at_rejects_non_strings() {
        let v = json!({"city": {"name": 12}});
        assert_eq!(string_at(&v, &[Key("city"), Key("name")]), None);
    }
}
