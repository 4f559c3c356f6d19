//! Core type and union definitions.
//!
//! This module contains the `Type` sum and the `Union` wrapper every
//! structural position uses. A union is semantically a multiset of types;
//! member order carries no meaning but is preserved everywhere for
//! deterministic iteration and code emission.

use crate::literal::{Literal, PrimitiveKind};
use indexmap::IndexMap;
use serde::Serialize;

/// Object fields keep insertion order for deterministic emission, while
/// equality treats them as an unordered name-keyed map.
pub type FieldMap = IndexMap<String, ObjectField>;

/// One field of a structural object type.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObjectField {
    pub union: Union,
    pub optional: bool,
}

impl ObjectField {
    pub fn required(union: Union) -> Self {
        ObjectField {
            union,
            optional: false,
        }
    }

    pub fn optional(union: Union) -> Self {
        ObjectField {
            union,
            optional: true,
        }
    }
}

/// All possible type variants.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Type {
    /// The top type; every value inhabits it.
    Unknown,
    /// Exactly one value.
    Literal(Literal),
    /// Any value of one `typeof` kind.
    Primitive(PrimitiveKind),
    /// Fixed-length heterogeneous sequence, one union per position.
    Tuple(Vec<Union>),
    /// Homogeneous variable-length sequence.
    Array(Union),
    /// Presence-checked structural record with named fields.
    Object(FieldMap),
    /// String-keyed dictionary whose values all lie in one union.
    Record(Union),
}

impl Type {
    pub fn literal_string(value: impl Into<String>) -> Self {
        Type::Literal(Literal::string(value))
    }

    pub fn literal_number(value: f64) -> Self {
        Type::Literal(Literal::number(value))
    }

    pub fn literal_boolean(value: bool) -> Self {
        Type::Literal(Literal::boolean(value))
    }

    pub fn literal_bigint(negative: bool, digits: &str) -> Self {
        Type::Literal(Literal::bigint(negative, digits))
    }

    pub fn undefined() -> Self {
        Type::Literal(Literal::Undefined)
    }

    pub fn null() -> Self {
        Type::Literal(Literal::Null)
    }

    /// Build an object type from `(name, field)` pairs, keeping their order.
    pub fn object<N, I>(fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, ObjectField)>,
    {
        Type::Object(
            fields
                .into_iter()
                .map(|(name, field)| (name.into(), field))
                .collect(),
        )
    }
}

/// An unordered sequence of types. Duplicates are permitted before dedup.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Union {
    types: Vec<Type>,
}

impl Union {
    pub fn new(types: Vec<Type>) -> Self {
        Union { types }
    }

    pub fn single(ty: Type) -> Self {
        Union { types: vec![ty] }
    }

    pub fn unknown() -> Self {
        Union::single(Type::Unknown)
    }

    /// The empty union: the uninhabited type.
    pub fn never() -> Self {
        Union { types: Vec::new() }
    }

    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn into_types(self) -> Vec<Type> {
        self.types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The sole member of a single-constructor union, if it is one.
    pub fn single_type(&self) -> Option<&Type> {
        match self.types.as_slice() {
            [ty] => Some(ty),
            _ => None,
        }
    }

    /// Concatenate unions and drop duplicate members.
    pub fn flatten(unions: impl IntoIterator<Item = Union>) -> Union {
        let mut out: Vec<Type> = Vec::new();
        for union in unions {
            for ty in union.types {
                if !out.contains(&ty) {
                    out.push(ty);
                }
            }
        }
        Union { types: out }
    }
}

impl FromIterator<Type> for Union {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        Union {
            types: iter.into_iter().collect(),
        }
    }
}

/// Multiset equality: every member must pair off with an equal member on
/// the other side. Order never matters.
impl PartialEq for Union {
    fn eq(&self, other: &Self) -> bool {
        if self.types.len() != other.types.len() {
            return false;
        }
        let mut used = vec![false; other.types.len()];
        'members: for ty in &self.types {
            for (i, candidate) in other.types.iter().enumerate() {
                if !used[i] && ty == candidate {
                    used[i] = true;
                    continue 'members;
                }
            }
            return false;
        }
        true
    }
}
