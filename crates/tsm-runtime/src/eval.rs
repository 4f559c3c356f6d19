//! Shape tests, occurrence walking, and decision-tree evaluation.
//!
//! This is the emitted code's behavior, written down directly. A check
//! node performs one outer-shape test at one occurrence; walking the
//! occurrence guards property steps with a presence test and turns the
//! array-element and record-values pseudo-steps into for-all loops that
//! fail on the first failing element and hold vacuously when empty.

use crate::value::Value;
use tsm_compiler::DecisionTree;
use tsm_types::{Accessor, Type, Union};

/// The single-step outer-shape test a back-end emits for a check type.
/// `ty` is expected in arguments-unknown form; nested unions are ignored.
pub fn shape_test(value: &Value, ty: &Type) -> bool {
    match ty {
        Type::Unknown => true,
        Type::Literal(literal) => value.strict_equals(literal),
        Type::Primitive(kind) => value.primitive_kind() == Some(*kind),
        Type::Tuple(elements) => match value {
            Value::Array(items) => items.len() == elements.len(),
            _ => false,
        },
        Type::Array(_) => matches!(value, Value::Array(_)),
        Type::Object(fields) => {
            value.is_object_like()
                && fields
                    .iter()
                    .filter(|(_, field)| !field.optional)
                    .all(|(name, _)| value.property(name).is_some())
        }
        Type::Record(_) => value.is_object_like(),
    }
}

/// Test the outer shape `ty` at the position `path` names inside `value`.
fn check_at(value: &Value, path: &[Accessor], ty: &Type) -> bool {
    let Some((accessor, rest)) = path.split_first() else {
        return shape_test(value, ty);
    };
    match accessor {
        Accessor::Property(name) => value
            .property(name)
            .is_some_and(|field| check_at(field, rest, ty)),
        Accessor::Index(index) => match value {
            Value::Array(items) => items
                .get(*index)
                .is_some_and(|item| check_at(item, rest, ty)),
            _ => false,
        },
        Accessor::ArrayElement => match value {
            Value::Array(items) => items.iter().all(|item| check_at(item, rest, ty)),
            _ => false,
        },
        Accessor::RecordValues => match value {
            Value::Object(fields) => fields.values().all(|field| check_at(field, rest, ty)),
            // Record checks admit arrays, whose "values" are the elements.
            Value::Array(items) => items.iter().all(|item| check_at(item, rest, ty)),
            _ => false,
        },
    }
}

/// Run a decision tree against a value: `None` means no case matched.
pub fn evaluate(tree: &DecisionTree, value: &Value) -> Option<i32> {
    match tree {
        DecisionTree::Fail => None,
        DecisionTree::Success(case) => Some(*case),
        DecisionTree::Check {
            ty,
            occurrence,
            success,
            fail,
        } => {
            if check_at(value, occurrence.accessors(), ty) {
                evaluate(success, value)
            } else {
                evaluate(fail, value)
            }
        }
    }
}

/// Run a decision tree the way a back-end with a default branch does:
/// `Fail` dispatches to the default case.
pub fn dispatch(tree: &DecisionTree, value: &Value) -> i32 {
    evaluate(tree, value).unwrap_or(tsm_compiler::table::DEFAULT_CASE)
}

/// Full structural membership of a value in a type.
///
/// This is what an entire case test means, with the same conventions as
/// the compiled checks: arrays pass object and record shape tests, and an
/// absent object field is accepted only when the field is optional and its
/// union demands nothing (contains `unknown`).
pub fn value_in_type(value: &Value, ty: &Type) -> bool {
    match ty {
        Type::Unknown => true,
        Type::Literal(literal) => value.strict_equals(literal),
        Type::Primitive(kind) => value.primitive_kind() == Some(*kind),
        Type::Tuple(elements) => match value {
            Value::Array(items) => {
                items.len() == elements.len()
                    && items
                        .iter()
                        .zip(elements)
                        .all(|(item, element)| value_in_union(item, element))
            }
            _ => false,
        },
        Type::Array(element) => match value {
            Value::Array(items) => items.iter().all(|item| value_in_union(item, element)),
            _ => false,
        },
        Type::Object(fields) => {
            value.is_object_like()
                && fields.iter().all(|(name, field)| match value.property(name) {
                    Some(item) => value_in_union(item, &field.union),
                    None => {
                        field.optional
                            && field.union.types().iter().any(|t| matches!(t, Type::Unknown))
                    }
                })
        }
        Type::Record(element) => match value {
            Value::Object(fields) => fields
                .values()
                .all(|item| value_in_union(item, element)),
            Value::Array(items) => items.iter().all(|item| value_in_union(item, element)),
            _ => false,
        },
    }
}

pub fn value_in_union(value: &Value, union: &Union) -> bool {
    union.types().iter().any(|ty| value_in_type(value, ty))
}

/// The sequential reference matcher: the first case whose pattern contains
/// the value. Decision-tree dispatch must be indistinguishable from this.
pub fn match_sequential(patterns: &[Union], case_indices: &[i32], value: &Value) -> Option<i32> {
    patterns
        .iter()
        .zip(case_indices)
        .find(|(pattern, _)| value_in_union(value, pattern))
        .map(|(_, &case)| case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tsm_types::types::ObjectField;
    use tsm_types::PrimitiveKind;

    fn v(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn test_shape_tests() {
        assert!(shape_test(&v(json!(65)), &Type::literal_number(65.0)));
        assert!(shape_test(&v(json!("x")), &Type::Primitive(PrimitiveKind::String)));
        assert!(shape_test(
            &v(json!([1, 2])),
            &Type::Tuple(vec![Union::unknown(), Union::unknown()])
        ));
        assert!(!shape_test(
            &v(json!([1])),
            &Type::Tuple(vec![Union::unknown(), Union::unknown()])
        ));
        assert!(shape_test(&v(json!([])), &Type::Array(Union::unknown())));
        assert!(!shape_test(&v(json!("no")), &Type::Array(Union::unknown())));
        assert!(shape_test(&v(json!({})), &Type::Record(Union::unknown())));
        // Arrays are objects as far as typeof can see.
        assert!(shape_test(&v(json!([])), &Type::Record(Union::unknown())));
        assert!(!shape_test(&Value::Null, &Type::Record(Union::unknown())));
    }

    #[test]
    fn test_object_shape_checks_required_presence_only() {
        let ty = Type::object([
            ("a", ObjectField::required(Union::unknown())),
            ("b", ObjectField::optional(Union::unknown())),
        ]);
        assert!(shape_test(&v(json!({"a": 1})), &ty));
        assert!(!shape_test(&v(json!({"b": 1})), &ty));
        assert!(shape_test(&v(json!({"a": 1, "b": 2, "extra": 3})), &ty));
    }

    #[test]
    fn test_check_at_walks_and_loops() {
        let number = Type::Primitive(PrimitiveKind::Number);
        let path = [
            Accessor::Property("items".into()),
            Accessor::ArrayElement,
            Accessor::Index(0),
        ];
        assert!(check_at(&v(json!({"items": [[1], [2, "x"]]})), &path, &number));
        assert!(!check_at(&v(json!({"items": [[1], ["x"]]})), &path, &number));
        // Loops hold vacuously on empty arrays.
        assert!(check_at(&v(json!({"items": []})), &path, &number));
        // Absent properties fail the guarded walk.
        assert!(!check_at(&v(json!({})), &path, &number));
        // Out-of-range indices fail.
        assert!(!check_at(
            &v(json!({"items": [[]]})),
            &path,
            &Type::Primitive(PrimitiveKind::Number)
        ));
    }

    #[test]
    fn test_record_values_walk() {
        let boolean = Type::Primitive(PrimitiveKind::Boolean);
        let path = [Accessor::RecordValues];
        assert!(check_at(&v(json!({"yes": true, "no": false})), &path, &boolean));
        assert!(check_at(&v(json!({})), &path, &boolean));
        assert!(!check_at(&v(json!({"yes": 1})), &path, &boolean));
    }

    #[test]
    fn test_value_in_type_structural() {
        let message = Type::object([
            (
                "kind",
                ObjectField::required(Union::single(Type::literal_string("ok"))),
            ),
            (
                "message",
                ObjectField::required(Union::single(Type::Primitive(PrimitiveKind::String))),
            ),
        ]);
        assert!(value_in_type(&v(json!({"kind": "ok", "message": "hi"})), &message));
        assert!(!value_in_type(&v(json!({"kind": "ok"})), &message));
        assert!(!value_in_type(&v(json!({"kind": "err", "message": "hi"})), &message));
        // Extra fields are fine: width subtyping.
        assert!(value_in_type(
            &v(json!({"kind": "ok", "message": "hi", "code": 0})),
            &message
        ));
    }

    #[test]
    fn test_optional_fields_accept_absence_only_when_unconstrained() {
        let open = Type::object([("a", ObjectField::optional(Union::unknown()))]);
        assert!(value_in_type(&v(json!({})), &open));
        assert!(value_in_type(&v(json!({"a": 5})), &open));

        let constrained = Type::object([(
            "a",
            ObjectField::optional(Union::single(Type::Primitive(PrimitiveKind::String))),
        )]);
        assert!(!value_in_type(&v(json!({})), &constrained));
        assert!(value_in_type(&v(json!({"a": "x"})), &constrained));
        assert!(!value_in_type(&v(json!({"a": 5})), &constrained));
    }

    #[test]
    fn test_match_sequential_first_wins() {
        let patterns = [
            Union::single(Type::Primitive(PrimitiveKind::String)),
            Union::single(Type::literal_string("a")),
            Union::unknown(),
        ];
        let cases = [0, 1, -1];
        assert_eq!(match_sequential(&patterns, &cases, &v(json!("a"))), Some(0));
        assert_eq!(match_sequential(&patterns, &cases, &v(json!(5))), Some(-1));
    }
}
