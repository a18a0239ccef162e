//! Conversions between Value, serde_json and serde types.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Value};

/// Convert a Value to a Rust type via serde.
pub fn from_value<T: DeserializeOwned>(value: &Value) -> Result<T, Error> {
    serde_json::from_value(value.to_json()).map_err(|e| Error::decode(e.to_string()))
}

/// Convert a Rust type to a Value via serde.
pub fn to_value<T: Serialize>(data: &T) -> Result<Value, Error> {
    let json = serde_json::to_value(data).map_err(|e| Error::encode(e.to_string()))?;
    Ok(Value::from(json))
}

impl Value {
    /// Snapshot this tree as JSON.
    ///
    /// Custom stores have no enumerable content and render as `null`, as do
    /// non-finite floats.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null | Value::Store(_) => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => match arr.try_borrow() {
                Ok(arr) => serde_json::Value::Array(arr.iter().map(Value::to_json).collect()),
                Err(_) => serde_json::Value::Null,
            },
            Value::Map(map) => match map.try_borrow() {
                Ok(map) => serde_json::Value::Object(
                    map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
                ),
                Err(_) => serde_json::Value::Null,
            },
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Value::Float(f)
                } else {
                    // Fallback for very large numbers
                    Value::String(n.to_string())
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::from_items(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::from(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<std::collections::BTreeMap<_, _>>(),
            ),
        }
    }
}
