//! A JavaScript-like runtime value model.
//!
//! Values carry exactly the distinctions the emitted checks can observe:
//! `typeof` kind, array-ness, length, field presence, and strict equality.
//! Object fields keep insertion order so walks are deterministic. JSON
//! covers every variant except `undefined` and bigints, which have direct
//! constructors.

use indexmap::IndexMap;
use serde::Serialize;
use tsm_types::{BigIntValue, Literal, PrimitiveKind};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    BigInt(BigIntValue),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    pub fn bigint(negative: bool, digits: &str) -> Self {
        Value::BigInt(BigIntValue::new(negative, digits))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// The `typeof` kind, for the kinds a primitive check can name.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Value::Boolean(_) => Some(PrimitiveKind::Boolean),
            Value::Number(_) => Some(PrimitiveKind::Number),
            Value::BigInt(_) => Some(PrimitiveKind::BigInt),
            Value::String(_) => Some(PrimitiveKind::String),
            _ => None,
        }
    }

    /// `typeof value === "object" && value !== null`. True for arrays,
    /// exactly as in the modelled language.
    pub fn is_object_like(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Strict equality against a literal (`===` semantics: `NaN` matches
    /// nothing, `null` and `undefined` are distinct).
    pub fn strict_equals(&self, literal: &Literal) -> bool {
        match (self, literal) {
            (Value::Undefined, Literal::Undefined) => true,
            (Value::Null, Literal::Null) => true,
            (Value::Boolean(a), Literal::Boolean(b)) => a == b,
            (Value::Number(a), Literal::Number(b)) => a == b,
            (Value::BigInt(a), Literal::BigInt(b)) => a == b,
            (Value::String(a), Literal::String(b)) => a == b,
            _ => false,
        }
    }

    /// Property lookup with `"name" in value` presence semantics: object
    /// fields by name, array elements by numeric name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Object(fields) => fields.get(name),
            Value::Array(elements) => {
                let index: usize = name.parse().ok()?;
                elements.get(index)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Object(
                fields
                    .into_iter()
                    .map(|(name, value)| (name, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
