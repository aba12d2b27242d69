//! Input-mapping resolution
//!
//! Each workflow step may carry an input mapping translating the accumulated
//! `outputs` map into the step's input object. An entry is either a literal
//! value (the `{value: ...}` wrapper) or a dotted path resolved against
//! `outputs`, whose first segment is normally `_initial` or a prior step's
//! agent name.
//!
//! Resolution is deliberately permissive: a missing segment yields `null`
//! rather than an error, pushing malformed paths onto the workflow author.

use crate::types::MappingValue;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Apply an input mapping to the accumulated outputs, producing the
/// effective step input object
pub fn resolve_input_mapping(
    mapping: &BTreeMap<String, MappingValue>,
    outputs: &Map<String, Value>,
) -> Value {
    let mut input = Map::new();
    for (field, spec) in mapping {
        let value = match spec {
            MappingValue::Literal { value } => value.clone(),
            MappingValue::Path(path) => resolve_path(path, outputs),
        };
        input.insert(field.clone(), value);
    }
    Value::Object(input)
}

/// Resolve a dotted path against the outputs map, segment by segment
///
/// Returns `null` as soon as a segment is missing or the current value is
/// not an object.
pub fn resolve_path(path: &str, outputs: &Map<String, Value>) -> Value {
    let mut segments = path.split('.');

    let first = match segments.next() {
        Some(s) => s,
        None => return Value::Null,
    };
    let mut current = match outputs.get(first) {
        Some(v) => v,
        None => return Value::Null,
    };

    for segment in segments {
        match current.get(segment) {
            Some(v) => current = v,
            None => return Value::Null,
        }
    }

    current.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn outputs() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("_initial".to_string(), json!({"x": 1}));
        map.insert("a".to_string(), json!({"y": 2, "nested": {"z": 3}}));
        map
    }

    #[test]
    fn test_resolve_literal_and_path() {
        let mut mapping = BTreeMap::new();
        mapping.insert("p".to_string(), MappingValue::Path("_initial.x".to_string()));
        mapping.insert("q".to_string(), MappingValue::Path("a.y".to_string()));
        mapping.insert(
            "r".to_string(),
            MappingValue::Literal { value: json!("a.y") },
        );

        let input = resolve_input_mapping(&mapping, &outputs());
        assert_eq!(input, json!({"p": 1, "q": 2, "r": "a.y"}));
    }

    #[test]
    fn test_resolve_nested_path() {
        assert_eq!(resolve_path("a.nested.z", &outputs()), json!(3));
    }

    #[test]
    fn test_missing_segment_is_null_not_error() {
        let outputs = outputs();
        assert_eq!(resolve_path("a.missing", &outputs), Value::Null);
        assert_eq!(resolve_path("ghost.y", &outputs), Value::Null);
        // Descending through a non-object value also resolves to null
        assert_eq!(resolve_path("_initial.x.deeper", &outputs), Value::Null);
    }

    #[test]
    fn test_whole_entry_path() {
        assert_eq!(resolve_path("a", &outputs()), json!({"y": 2, "nested": {"z": 3}}));
    }
}
