//! Literal values and primitive kinds.
//!
//! Literals are the leaves of the type lattice: a literal type is inhabited
//! by exactly one runtime value. Numbers compare with IEEE `==`, matching
//! the strict-equality semantics of the emitted checks (`NaN` is unequal to
//! itself, `-0` equals `0`). Bigints are kept in a canonical sign + decimal
//! digit form so equality is a plain field comparison.

use serde::Serialize;

/// An arbitrary-precision integer literal in canonical form.
///
/// `digits` holds the decimal magnitude with no leading zeros; zero is
/// always `{ negative: false, digits: "0" }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BigIntValue {
    pub negative: bool,
    pub digits: String,
}

impl BigIntValue {
    /// Build a canonical bigint from a sign and raw decimal digits.
    pub fn new(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return BigIntValue {
                negative: false,
                digits: "0".to_string(),
            };
        }
        BigIntValue {
            negative,
            digits: trimmed.to_string(),
        }
    }
}

/// A literal value for literal types.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Literal {
    Number(f64),
    String(String),
    Boolean(bool),
    BigInt(BigIntValue),
    Undefined,
    Null,
}

impl Literal {
    pub fn number(value: f64) -> Self {
        Literal::Number(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Literal::String(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Literal::Boolean(value)
    }

    pub fn bigint(negative: bool, digits: &str) -> Self {
        Literal::BigInt(BigIntValue::new(negative, digits))
    }

    /// The `typeof` kind this literal belongs to.
    ///
    /// `undefined` and `null` have no primitive kind: they are not subtypes
    /// of any primitive type.
    pub fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Literal::Number(_) => Some(PrimitiveKind::Number),
            Literal::String(_) => Some(PrimitiveKind::String),
            Literal::Boolean(_) => Some(PrimitiveKind::Boolean),
            Literal::BigInt(_) => Some(PrimitiveKind::BigInt),
            Literal::Undefined | Literal::Null => None,
        }
    }
}

/// The four `typeof`-testable primitive kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveKind {
    String,
    Number,
    BigInt,
    Boolean,
}

impl PrimitiveKind {
    /// The string `typeof` evaluates to for values of this kind.
    pub fn type_of(self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Number => "number",
            PrimitiveKind::BigInt => "bigint",
            PrimitiveKind::Boolean => "boolean",
        }
    }
}
