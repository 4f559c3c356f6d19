//! Canonicalization tests: dedup, maxima-collapse, recursion, idempotence.

use tsm_types::types::ObjectField;
use tsm_types::{PrimitiveKind, Type, Union};

#[test]
fn test_canonicalize_primitive_union_to_self() {
    let u = Union::new(vec![
        Type::Primitive(PrimitiveKind::Number),
        Type::Primitive(PrimitiveKind::String),
    ]);
    assert_eq!(u.canonicalize(), u);
}

#[test]
fn test_canonicalize_drops_duplicates() {
    let u = Union::new(vec![
        Type::literal_number(1.0),
        Type::literal_number(1.0),
        Type::literal_number(2.0),
    ]);
    assert_eq!(u.canonicalize().len(), 2);
}

#[test]
fn test_canonicalize_collapses_subsumed_members() {
    let u = Union::new(vec![
        Type::literal_string("a"),
        Type::Primitive(PrimitiveKind::String),
    ]);
    assert_eq!(
        u.canonicalize(),
        Union::single(Type::Primitive(PrimitiveKind::String))
    );

    let with_top = Union::new(vec![
        Type::Unknown,
        Type::Primitive(PrimitiveKind::Boolean),
        Type::literal_boolean(false),
    ]);
    assert_eq!(with_top.canonicalize(), Union::unknown());
}

#[test]
fn test_canonicalize_recurses_into_structure() {
    let array = Union::single(Type::Array(Union::new(vec![
        Type::literal_number(1.0),
        Type::Primitive(PrimitiveKind::Number),
    ])));
    let expected = Union::single(Type::Array(Union::single(Type::Primitive(
        PrimitiveKind::Number,
    ))));
    assert_eq!(array.canonicalize(), expected);

    let object = Union::single(Type::object([(
        "a",
        ObjectField::optional(Union::new(vec![Type::Unknown, Type::null()])),
    )]));
    let canon = object.canonicalize();
    match canon.single_type() {
        Some(Type::Object(fields)) => {
            let field = &fields["a"];
            assert!(field.optional);
            assert_eq!(field.union, Union::unknown());
        }
        other => panic!("expected object, got {other:?}"),
    }
}

#[test]
fn test_canonicalize_is_idempotent() {
    let unions = [
        Union::never(),
        Union::unknown(),
        Union::new(vec![
            Type::literal_string("a"),
            Type::literal_string("a"),
            Type::Primitive(PrimitiveKind::String),
            Type::Tuple(vec![Union::new(vec![
                Type::Unknown,
                Type::Primitive(PrimitiveKind::BigInt),
            ])]),
        ]),
    ];
    for u in unions {
        let once = u.canonicalize();
        assert_eq!(once.canonicalize(), once);
    }
}
