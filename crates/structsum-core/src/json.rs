//! Conversion from parsed JSON into [`Value`].
//!
//! Objects become string-keyed mappings, arrays become sequences. Numbers map
//! to `I64` when they fit, then `U64`, and otherwise `F64`. Object keys are
//! already unique, so mappings are built without replacement checks.

use serde_json::Value as Json;

use crate::value::{Mapping, Value};

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::from(i)
                } else if let Some(u) = n.as_u64() {
                    Value::from(u)
                } else if let Some(f) = n.as_f64() {
                    Value::from(f)
                } else {
                    // Only reachable with serde_json's `arbitrary_precision`
                    // feature, which this crate does not enable. Keep the
                    // literal digits rather than collapsing to one float.
                    Value::String(n.to_string())
                }
            }
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Sequence(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => Value::Mapping(Mapping::from_unique_pairs(
                map.into_iter().map(|(k, v)| (Value::String(k), Value::from(v))),
            )),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Value::from(json.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Float, Int, Uint};
    use serde_json::json;

    #[test]
    fn numbers_pick_the_narrowest_json_kind() {
        assert_eq!(Value::from(json!(-3)), Value::Int(Int::I64(-3)));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(Uint::U64(u64::MAX)));
        assert_eq!(Value::from(json!(1.5)), Value::Float(Float::F64(1.5)));
    }

    #[test]
    fn floats_keep_their_bit_pattern() {
        let Value::Float(Float::F64(f)) = Value::from(json!(-0.0)) else {
            panic!("expected f64");
        };
        assert_eq!(f.to_bits(), (-0.0f64).to_bits());
        assert_eq!(Value::from(json!(1e308)), Value::Float(Float::F64(1e308)));
    }

    #[test]
    fn large_objects_convert_with_every_key() {
        let object: serde_json::Map<String, Json> =
            (0..50_000).map(|i| (format!("key{i}"), json!(i))).collect();
        let Value::Mapping(mapping) = Value::from(Json::Object(object)) else {
            panic!("expected mapping");
        };
        assert_eq!(mapping.len(), 50_000);
        assert_eq!(
            mapping.get(&Value::from("key49999")),
            Some(&Value::Int(Int::I64(49_999)))
        );
        assert_eq!(mapping.get(&Value::from("key50000")), None);
    }

    #[test]
    fn objects_become_string_keyed_mappings() {
        let value = Value::from(json!({"b": [true, null], "a": "x"}));
        let Value::Mapping(mapping) = value else {
            panic!("expected mapping");
        };
        assert_eq!(mapping.len(), 2);
        assert_eq!(
            mapping.get(&Value::from("b")),
            Some(&Value::Sequence(vec![Value::Bool(true), Value::Null]))
        );
    }
}
