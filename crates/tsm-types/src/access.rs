//! Accessors, occurrences, and structural descent.
//!
//! An occurrence names a position inside the scrutinee as a path of
//! accessor steps; the empty occurrence is the scrutinee itself. Two of the
//! steps are pseudo-accessors: `ArrayElement` stands for "every element of
//! the array" and `RecordValues` for "every value of the record", and the
//! emitted runtime walk turns them into loops.

use crate::types::{Type, Union};
use serde::Serialize;
use smallvec::SmallVec;

/// A single step into a value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Accessor {
    Property(String),
    Index(usize),
    ArrayElement,
    RecordValues,
}

/// A path of accessors naming a sub-position of the scrutinee.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Occurrence(SmallVec<[Accessor; 4]>);

impl Occurrence {
    /// The scrutinee itself.
    pub fn root() -> Self {
        Occurrence(SmallVec::new())
    }

    pub fn new(accessors: impl IntoIterator<Item = Accessor>) -> Self {
        Occurrence(accessors.into_iter().collect())
    }

    /// This occurrence extended by one more step.
    pub fn child(&self, accessor: Accessor) -> Self {
        let mut path = self.0.clone();
        path.push(accessor);
        Occurrence(path)
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Type {
    /// The union reachable by one accessor step through `self`, or `None`
    /// when the accessor is structurally incompatible. `unknown` commits
    /// to nothing and propagates as `{unknown}` under every step.
    pub fn access(&self, accessor: &Accessor) -> Option<Union> {
        match (self, accessor) {
            (Type::Unknown, _) => Some(Union::unknown()),
            (Type::Object(fields), Accessor::Property(name)) => {
                fields.get(name).map(|field| field.union.clone())
            }
            (Type::Tuple(elements), Accessor::Index(index)) => elements.get(*index).cloned(),
            (Type::Array(element), Accessor::ArrayElement) => Some(element.clone()),
            // A tuple seen as an array: any element.
            (Type::Tuple(elements), Accessor::ArrayElement) => {
                Some(Union::flatten(elements.iter().cloned()))
            }
            (Type::Record(value), Accessor::RecordValues) => Some(value.clone()),
            // An object seen as a record: any field value.
            (Type::Object(fields), Accessor::RecordValues) => Some(Union::flatten(
                fields.values().map(|field| field.union.clone()),
            )),
            _ => None,
        }
    }

    /// All immediate `(accessor, union)` children of this type, in
    /// deterministic order. Leaves have none.
    pub fn arguments(&self) -> Vec<(Accessor, Union)> {
        match self {
            Type::Tuple(elements) => elements
                .iter()
                .enumerate()
                .map(|(i, element)| (Accessor::Index(i), element.clone()))
                .collect(),
            Type::Array(element) => vec![(Accessor::ArrayElement, element.clone())],
            Type::Object(fields) => fields
                .iter()
                .map(|(name, field)| (Accessor::Property(name.clone()), field.union.clone()))
                .collect(),
            Type::Record(value) => vec![(Accessor::RecordValues, value.clone())],
            Type::Unknown | Type::Literal(_) | Type::Primitive(_) => Vec::new(),
        }
    }

    fn replace_step(&self, accessor: &Accessor, rest: &[Accessor], replacement: &Union) -> Option<Type> {
        match (self, accessor) {
            (Type::Object(fields), Accessor::Property(name)) => {
                let mut new_fields = fields.clone();
                let field = new_fields.get_mut(name)?;
                field.union = field.union.replace_path_or_self(rest, replacement);
                Some(Type::Object(new_fields))
            }
            (Type::Tuple(elements), Accessor::Index(index)) => {
                if *index >= elements.len() {
                    return None;
                }
                let mut new_elements = elements.clone();
                let replaced = new_elements[*index].replace_path_or_self(rest, replacement);
                new_elements[*index] = replaced;
                Some(Type::Tuple(new_elements))
            }
            (Type::Array(element), Accessor::ArrayElement) => {
                Some(Type::Array(element.replace_path_or_self(rest, replacement)))
            }
            (Type::Record(value), Accessor::RecordValues) => {
                Some(Type::Record(value.replace_path_or_self(rest, replacement)))
            }
            _ => None,
        }
    }
}

impl Union {
    /// Replace the sub-union reachable by `occurrence` with `replacement`.
    ///
    /// Constituents whose constructor disagrees with the next step
    /// (including `unknown`, which has no structure to descend into) are
    /// dropped, as are tuples indexed out of range. Returns a new union.
    pub fn replace_at(&self, occurrence: &Occurrence, replacement: &Union) -> Union {
        self.replace_path_or_self(occurrence.accessors(), replacement)
    }

    fn replace_path_or_self(&self, path: &[Accessor], replacement: &Union) -> Union {
        match path.split_first() {
            None => replacement.clone(),
            Some((accessor, rest)) => self
                .types()
                .iter()
                .filter_map(|ty| ty.replace_step(accessor, rest, replacement))
                .collect(),
        }
    }
}
