// ABOUTME: Value <-> JSON conversion backing the `json`/`parseJson` built-ins

use crate::error::ExoError;
use crate::value::Value;

/// Type mapping: Map -> object, List -> array, Int/Float -> number,
/// Str -> string, Bool -> boolean, Null -> null. Procedures and built-ins
/// cannot be encoded.
pub fn value_to_json(value: &Value) -> Result<serde_json::Value, ExoError> {
    match value {
        Value::Null => Ok(serde_json::Value::Null),
        Value::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        Value::Int(n) => Ok(serde_json::Value::Number((*n).into())),
        Value::Float(n) => serde_json::Number::from_f64(*n)
            .map(serde_json::Value::Number)
            .ok_or_else(|| ExoError::type_error("json", "finite number", "NaN or infinity")),
        Value::Str(s) => Ok(serde_json::Value::String(s.clone())),
        Value::List(items) => {
            let converted: Result<Vec<_>, _> = items.borrow().iter().map(value_to_json).collect();
            Ok(serde_json::Value::Array(converted?))
        }
        Value::Map(entries) => {
            let mut object = serde_json::Map::new();
            for (key, value) in entries.borrow().iter() {
                let key_str = match key {
                    Value::Str(s) => s.clone(),
                    other => other.to_string(),
                };
                object.insert(key_str, value_to_json(value)?);
            }
            Ok(serde_json::Value::Object(object))
        }
        other => Err(ExoError::type_error("json", "encodable value", other.type_name())),
    }
}

pub fn json_to_value(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        serde_json::Value::String(s) => Value::str(s.clone()),
        serde_json::Value::Array(items) => Value::list(items.iter().map(json_to_value).collect()),
        serde_json::Value::Object(object) => {
            Value::map(object.iter().map(|(k, v)| (Value::str(k.clone()), json_to_value(v))).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_nested_map_and_list() {
        let original = Value::map(vec![
            (Value::str("name"), Value::str("Alice")),
            (Value::str("tags"), Value::list(vec![Value::Int(1), Value::Int(2)])),
        ]);
        let json = value_to_json(&original).unwrap();
        let back = json_to_value(&json);
        assert_eq!(back, original);
    }

    #[test]
    fn integers_stay_integers() {
        let json = value_to_json(&Value::Int(42)).unwrap();
        assert_eq!(json_to_value(&json), Value::Int(42));
    }
}
