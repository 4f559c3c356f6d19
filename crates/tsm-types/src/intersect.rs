//! Intersection of types and unions.
//!
//! Intersection is partial: it is defined on compatible constructors and
//! `None` otherwise. Cross-constructor pairs (tuple with array, object with
//! record) are undefined; the compiler never needs them because it compares
//! constructors before specializing, and dropping them from a union
//! intersection is conservative.

use crate::types::{FieldMap, ObjectField, Type, Union};

impl Type {
    /// `self ⊓ other`, or `None` when the constructors are incompatible.
    ///
    /// When one side is a subtype of the other the intersection is the
    /// smaller side; this covers `unknown`, literals against literals, and
    /// literals against their primitive in one rule.
    pub fn intersect(&self, other: &Type) -> Option<Type> {
        if self.is_subtype_of(other) {
            return Some(self.clone());
        }
        if other.is_subtype_of(self) {
            return Some(other.clone());
        }
        match (self, other) {
            (Type::Tuple(a), Type::Tuple(b)) if a.len() == b.len() => Some(Type::Tuple(
                a.iter().zip(b).map(|(x, y)| x.intersect(y)).collect(),
            )),
            (Type::Array(a), Type::Array(b)) => Some(Type::Array(a.intersect(b))),
            (Type::Object(a), Type::Object(b)) => Some(Type::Object(intersect_fields(a, b))),
            (Type::Record(a), Type::Record(b)) => Some(Type::Record(a.intersect(b))),
            _ => None,
        }
    }
}

/// Union of field names; common fields intersect their unions. A common
/// field stays optional only when both sides agree it is.
fn intersect_fields(a: &FieldMap, b: &FieldMap) -> FieldMap {
    let mut fields = FieldMap::new();
    for (name, a_field) in a {
        let field = match b.get(name) {
            Some(b_field) => ObjectField {
                union: a_field.union.intersect(&b_field.union),
                optional: a_field.optional && b_field.optional,
            },
            None => a_field.clone(),
        };
        fields.insert(name.clone(), field);
    }
    for (name, b_field) in b {
        if !a.contains_key(name) {
            fields.insert(name.clone(), b_field.clone());
        }
    }
    fields
}

impl Union {
    /// All defined pairwise intersections, deduped.
    pub fn intersect(&self, other: &Union) -> Union {
        let mut out: Vec<Type> = Vec::new();
        for a in self.types() {
            for b in other.types() {
                if let Some(ty) = a.intersect(b) {
                    if !out.contains(&ty) {
                        out.push(ty);
                    }
                }
            }
        }
        Union::new(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Literal, PrimitiveKind};

    #[test]
    fn test_unknown_is_identity() {
        let number = Type::Primitive(PrimitiveKind::Number);
        assert_eq!(Type::Unknown.intersect(&number), Some(number.clone()));
        assert_eq!(number.intersect(&Type::Unknown), Some(number));
    }

    #[test]
    fn test_literal_against_primitive() {
        let lit = Type::literal_string("a");
        let string = Type::Primitive(PrimitiveKind::String);
        assert_eq!(lit.intersect(&string), Some(lit.clone()));
        assert_eq!(string.intersect(&lit), Some(lit.clone()));
        let number = Type::Primitive(PrimitiveKind::Number);
        assert_eq!(lit.intersect(&number), None);
    }

    #[test]
    fn test_disjoint_literals() {
        assert_eq!(
            Type::Literal(Literal::Null).intersect(&Type::Literal(Literal::Undefined)),
            None
        );
    }

    #[test]
    fn test_object_merge() {
        let a = Type::object([(
            "x",
            ObjectField::required(Union::single(Type::Primitive(PrimitiveKind::Number))),
        )]);
        let b = Type::object([(
            "y",
            ObjectField::required(Union::single(Type::Primitive(PrimitiveKind::String))),
        )]);
        let merged = a.intersect(&b).unwrap();
        match &merged {
            Type::Object(fields) => {
                assert_eq!(fields.len(), 2);
                assert!(fields.contains_key("x"));
                assert!(fields.contains_key("y"));
            }
            other => panic!("expected object, got {other:?}"),
        }
        assert!(merged.is_subtype_of(&a));
        assert!(merged.is_subtype_of(&b));
    }

    #[test]
    fn test_cross_constructor_is_undefined() {
        let tuple = Type::Tuple(vec![Union::unknown()]);
        let array = Type::Array(Union::single(Type::Primitive(PrimitiveKind::Number)));
        assert_eq!(tuple.intersect(&array), None);
        let record = Type::Record(Union::single(Type::Primitive(PrimitiveKind::Number)));
        let object = Type::object([(
            "a",
            ObjectField::required(Union::single(Type::Primitive(PrimitiveKind::String))),
        )]);
        assert_eq!(object.intersect(&record), None);
    }

    #[test]
    fn test_union_intersection_is_subunion_of_both() {
        let u = Union::new(vec![
            Type::Primitive(PrimitiveKind::String),
            Type::Primitive(PrimitiveKind::Number),
        ]);
        let v = Union::new(vec![
            Type::literal_string("a"),
            Type::Primitive(PrimitiveKind::Number),
            Type::Primitive(PrimitiveKind::Boolean),
        ]);
        let both = u.intersect(&v);
        assert!(both.is_subtype_of(&u));
        assert!(both.is_subtype_of(&v));
        assert_eq!(both.len(), 2);
    }
}
