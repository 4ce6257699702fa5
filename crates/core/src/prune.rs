//! Strict-mode pruning of serialized descriptor trees.
//!
//! Pruning works on the JSON document rather than on typed descriptors: the
//! result is a descriptor with keys missing, which the typed model cannot
//! express.

use serde_json::{Map, Value};

/// Drop every `false`, `[]` and `{}` value from objects, post-order.
///
/// Returns `value` untouched when `enabled` is false. Array elements are
/// pruned but never removed, and the root is never removed.
pub fn prune(value: Value, enabled: bool) -> Value {
    if !enabled {
        return value;
    }
    prune_value(value)
}

fn prune_value(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(prune_object(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(prune_value).collect()),
        other => other,
    }
}

fn prune_object(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, child)| (key, prune_value(child)))
        .filter(|(_, child)| !is_noise(child))
        .collect()
}

fn is_noise(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Null | Value::Number(_) | Value::String(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn removes_false_and_empty_collections() {
        let v = json!({"public": true, "private": false, "methods": []});
        assert_eq!(prune(v, true), json!({"public": true}));
    }

    #[test]
    fn disabled_returns_input_unchanged() {
        let v = json!({"private": false, "methods": [], "meta": {}});
        assert_eq!(prune(v.clone(), false), v);
    }

    #[test]
    fn recurses_into_array_elements_and_nested_objects() {
        let v = json!({
            "name": "Outer",
            "fields": [{"name": "a", "static": false, "final": true}],
            "inners": [{"name": "In", "fields": [], "abstract": false}],
            "meta": {"empty": [], "flag": false}
        });
        let pruned = prune(v, true);
        assert_eq!(
            pruned,
            json!({
                "name": "Outer",
                "fields": [{"name": "a", "final": true}],
                "inners": [{"name": "In"}]
            })
        );
    }

    #[test]
    fn keeps_objects_inside_arrays_even_when_emptied() {
        let v = json!({"items": [{"gone": false}]});
        assert_eq!(prune(v, true), json!({"items": [{}]}));
    }

    #[test]
    fn pruning_is_idempotent() {
        let v = json!({
            "name": "T",
            "public": false,
            "methods": [{"name": "m", "params": [], "throws": ["E"], "native": false}],
            "nested": {"deeper": {"x": false}},
            "items": [{"gone": false}]
        });
        let once = prune(v, true);
        let twice = prune(once.clone(), true);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_key_order() {
        let v = json!({"name": "T", "kind": "Class", "public": true, "static": false, "extends": ["B"]});
        let keys: Vec<_> = prune(v, true)
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["name", "kind", "public", "extends"]);
    }
}
