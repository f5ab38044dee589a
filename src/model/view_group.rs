//! View groups: named channel-index lists used by the console display.
//!
//! The flat file stores each group under `vg.<n>` as a JSON array encoded in
//! a string. The `LOCAL` blob keeps raw arrays of the same indices, so both
//! forms are remapped together.

use serde_json::Value;

pub const VIEW_GROUP_NAMESPACE: &str = "vg";

/// Decoded view group.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewGroup {
    pub name: String,
    pub members: Vec<i64>,
}

impl ViewGroup {
    /// Decode a `vg.<n>` value. Returns `None` for anything that is not a
    /// string-encoded array of integers.
    pub fn decode(name: &str, value: &Value) -> Option<Self> {
        let text = value.as_str()?;
        let members = serde_json::from_str::<Vec<i64>>(text).ok()?;
        Some(Self {
            name: name.to_string(),
            members,
        })
    }
}

fn exchange(value: &mut Value, a: i64, b: i64) -> bool {
    match value.as_i64() {
        Some(n) if n == a => {
            *value = Value::from(b);
            true
        }
        Some(n) if n == b => {
            *value = Value::from(a);
            true
        }
        _ => false,
    }
}

fn exchange_all(items: &mut [Value], a: i64, b: i64) -> bool {
    items
        .iter_mut()
        .fold(false, |changed, item| exchange(item, a, b) | changed)
}

/// Exchange `a` and `b` inside a string-encoded index list.
///
/// The string is only rewritten when an index actually moved.
pub fn remap_encoded(value: &mut Value, a: i64, b: i64) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    let Ok(mut items) = serde_json::from_str::<Vec<Value>>(text) else {
        return false;
    };
    if !exchange_all(&mut items, a, b) {
        return false;
    }
    match serde_json::to_string(&items) {
        Ok(encoded) => {
            *value = Value::String(encoded);
            true
        }
        Err(_) => false,
    }
}

/// Exchange `a` and `b` in every raw index list under `value`.
///
/// Arrays of numbers are treated as index lists; objects and arrays of
/// arrays are searched recursively.
pub fn remap_raw(value: &mut Value, a: i64, b: i64) -> bool {
    match value {
        Value::Array(items) if items.iter().all(Value::is_number) => exchange_all(items, a, b),
        Value::Array(items) => items
            .iter_mut()
            .fold(false, |changed, item| remap_raw(item, a, b) | changed),
        Value::Object(map) => map
            .values_mut()
            .fold(false, |changed, item| remap_raw(item, a, b) | changed),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode() {
        let group = ViewGroup::decode("2", &json!("[0,1,40]")).unwrap();
        assert_eq!(group.members, vec![0, 1, 40]);
        assert!(ViewGroup::decode("2", &json!([0, 1])).is_none());
        assert!(ViewGroup::decode("2", &json!("not json")).is_none());
    }

    #[test]
    fn test_remap_encoded_exchanges_both_ways() {
        let mut value = json!("[3,0,5,7]");
        assert!(remap_encoded(&mut value, 3, 5));
        assert_eq!(value, json!("[5,0,3,7]"));
    }

    #[test]
    fn test_remap_encoded_leaves_untouched_groups_alone() {
        let mut value = json!("[ 1, 2 ]");
        assert!(!remap_encoded(&mut value, 3, 5));
        assert_eq!(value, json!("[ 1, 2 ]"));
    }

    #[test]
    fn test_remap_raw_nested() {
        let mut local = json!({"0": [1, 2], "1": [[2], [9]], "name": "x"});
        assert!(remap_raw(&mut local, 1, 2));
        assert_eq!(local, json!({"0": [2, 1], "1": [[1], [9]], "name": "x"}));
    }
}
