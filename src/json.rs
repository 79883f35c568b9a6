//! Adapter from `serde_json` documents (feature-gated)
//!
//! Lets a framework that already holds parsed JSON hand fields to a rule
//! without building [`Value`]s by hand.
//!
//! | JSON              | Shape    |
//! |-------------------|----------|
//! | `null`            | `Nil`    |
//! | `true` / `false`  | `Bool`   |
//! | integer number    | `Int`    |
//! | other number      | `Float`  |
//! | string            | `String` |
//! | array             | `Slice`  |
//! | object            | `Map`    |
//!
//! # Example
//!
//! ```rust
//! use required_rule::{Required, Shape, Value};
//!
//! let doc: serde_json::Value = serde_json::from_str(r#"{"tags": [], "age": 0}"#).unwrap();
//! let rule = Required::new();
//!
//! let tags = rule.is_valid(&Value::from(doc["tags"].clone()));
//! assert_eq!(tags.errors()[0].shape(), Shape::Slice);
//!
//! assert!(rule.is_valid(&Value::from(doc["age"].clone())).is_valid());
//! assert!(!rule.is_valid(&Value::from(doc["missing"].clone())).is_valid());
//! ```

use serde_json::Value as Json;

use crate::value::Value;

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        match json {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Value::Int(i128::from(u))
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::String(s),
            Json::Array(items) => Value::Slice(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Value::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        Value::from(json.clone())
    }
}
