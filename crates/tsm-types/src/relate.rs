//! The subtype relation and constructor-level comparisons.
//!
//! Subtyping is structural and defined by cases on the supertype. Union
//! subtyping is the usual pointwise form: `U <: V` iff every member of `U`
//! is a subtype of some member of `V`.
//!
//! Optionality of object fields is carried by the lattice but ignored by
//! subtyping: a supertype's field must be present in the subtype either
//! way. Constructor equality, in contrast, does distinguish optionality,
//! because the outer runtime test for an object (its presence checks)
//! depends on it.

use crate::types::{Type, Union};
use rustc_hash::FxHashSet;

impl Type {
    /// Structural subtype check: is `self` a subtype of `sup`?
    pub fn is_subtype_of(&self, sup: &Type) -> bool {
        match sup {
            Type::Unknown => true,
            Type::Literal(b) => matches!(self, Type::Literal(a) if a == b),
            Type::Primitive(p) => match self {
                Type::Primitive(q) => q == p,
                Type::Literal(l) => l.primitive_kind() == Some(*p),
                _ => false,
            },
            Type::Tuple(sup_elements) => match self {
                Type::Tuple(elements) => {
                    elements.len() == sup_elements.len()
                        && elements
                            .iter()
                            .zip(sup_elements)
                            .all(|(a, b)| a.is_subtype_of(b))
                }
                _ => false,
            },
            Type::Array(sup_element) => match self {
                Type::Array(element) => element.is_subtype_of(sup_element),
                // A tuple is an array whose elements all lie in the
                // element union.
                Type::Tuple(elements) => {
                    Union::flatten(elements.iter().cloned()).is_subtype_of(sup_element)
                }
                _ => false,
            },
            Type::Object(sup_fields) => match self {
                // Width subtyping: extra fields on `self` are fine.
                Type::Object(fields) => sup_fields.iter().all(|(name, sup_field)| {
                    fields
                        .get(name)
                        .is_some_and(|field| field.union.is_subtype_of(&sup_field.union))
                }),
                _ => false,
            },
            Type::Record(sup_value) => match self {
                Type::Record(value) => value.is_subtype_of(sup_value),
                // An object is a record whose field values all lie in the
                // value union.
                Type::Object(fields) => {
                    Union::flatten(fields.values().map(|f| f.union.clone()))
                        .is_subtype_of(sup_value)
                }
                _ => false,
            },
        }
    }

    /// Strict subtyping: below, and not equivalent.
    pub fn is_proper_subtype_of(&self, sup: &Type) -> bool {
        self.is_subtype_of(sup) && !sup.is_subtype_of(self)
    }

    /// Compare only the outer shape: same literal value, same primitive
    /// kind, same tuple length, same object field names and optionality.
    /// Nested unions are not inspected.
    pub fn equal_constructor(&self, other: &Type) -> bool {
        match (self, other) {
            (Type::Unknown, Type::Unknown) => true,
            (Type::Literal(a), Type::Literal(b)) => a == b,
            (Type::Primitive(a), Type::Primitive(b)) => a == b,
            (Type::Tuple(a), Type::Tuple(b)) => a.len() == b.len(),
            (Type::Array(_), Type::Array(_)) => true,
            (Type::Object(a), Type::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                let names: FxHashSet<(&str, bool)> = a
                    .iter()
                    .map(|(name, field)| (name.as_str(), field.optional))
                    .collect();
                b.iter()
                    .all(|(name, field)| names.contains(&(name.as_str(), field.optional)))
            }
            (Type::Record(_), Type::Record(_)) => true,
            _ => false,
        }
    }

    /// Same outer constructor, every nested union replaced by `{unknown}`.
    ///
    /// This is the form decision-tree checks carry: the runtime test it
    /// describes commits only to the outer shape. The result is always a
    /// supertype of `self`.
    pub fn make_arguments_unknown(&self) -> Type {
        match self {
            Type::Tuple(elements) => Type::Tuple(vec![Union::unknown(); elements.len()]),
            Type::Array(_) => Type::Array(Union::unknown()),
            Type::Object(fields) => Type::Object(
                fields
                    .iter()
                    .map(|(name, field)| {
                        let mut unknown_field = field.clone();
                        unknown_field.union = Union::unknown();
                        (name.clone(), unknown_field)
                    })
                    .collect(),
            ),
            Type::Record(_) => Type::Record(Union::unknown()),
            other => other.clone(),
        }
    }
}

impl Union {
    /// Pointwise union subtyping.
    pub fn is_subtype_of(&self, sup: &Union) -> bool {
        self.types()
            .iter()
            .all(|a| sup.types().iter().any(|b| a.is_subtype_of(b)))
    }
}
