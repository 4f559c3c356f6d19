//! Canonicalization, dedup, and extremal elements.
//!
//! Minima and maxima are taken under strict subtyping: a minimum has no
//! strict subtype elsewhere in the list, a maximum no strict supertype.
//! Reflexive equals are kept, so both are non-empty for non-empty input.
//! Canonicalizing a union recursively canonicalizes its members, drops
//! duplicates, and keeps the maxima, so subsumed members disappear.

use crate::types::{Type, Union};

/// Members of `types` with no strict subtype also in `types`.
pub fn type_minima(types: &[Type]) -> Vec<Type> {
    types
        .iter()
        .filter(|ty| !types.iter().any(|other| other.is_proper_subtype_of(ty)))
        .cloned()
        .collect()
}

/// Members of `types` with no strict supertype also in `types`.
pub fn type_maxima(types: &[Type]) -> Vec<Type> {
    types
        .iter()
        .filter(|ty| !types.iter().any(|other| ty.is_proper_subtype_of(other)))
        .cloned()
        .collect()
}

fn dedup(types: Vec<Type>) -> Vec<Type> {
    let mut out: Vec<Type> = Vec::new();
    for ty in types {
        if !out.contains(&ty) {
            out.push(ty);
        }
    }
    out
}

impl Type {
    /// Recursively canonicalize every nested union.
    pub fn canonicalize(&self) -> Type {
        match self {
            Type::Tuple(elements) => {
                Type::Tuple(elements.iter().map(Union::canonicalize).collect())
            }
            Type::Array(element) => Type::Array(element.canonicalize()),
            Type::Object(fields) => Type::Object(
                fields
                    .iter()
                    .map(|(name, field)| {
                        let mut canon = field.clone();
                        canon.union = field.union.canonicalize();
                        (name.clone(), canon)
                    })
                    .collect(),
            ),
            Type::Record(value) => Type::Record(value.canonicalize()),
            other => other.clone(),
        }
    }
}

impl Union {
    /// Canonical form: members canonicalized, duplicates dropped, then
    /// only the maxima kept. Idempotent.
    pub fn canonicalize(&self) -> Union {
        let members = dedup(self.types().iter().map(Type::canonicalize).collect());
        Union::new(type_maxima(&members))
    }
}
