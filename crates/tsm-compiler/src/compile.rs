//! The recursive match compiler.
//!
//! Each step proposes candidate checks from the minima of every column,
//! takes the skippable fast path when the input refinement already decides
//! a check, and otherwise emits a `Check` node and recurses on the
//! specialized success and fail tables. Selection among candidates is
//! deterministic, so compilation is a pure function of its inputs.

use crate::table::MatchTable;
use crate::tree::DecisionTree;
use tracing::{debug, trace};
use tsm_types::{type_minima, Type, Union};

/// A proposed single-step test: an outer shape at one column's occurrence.
#[derive(Clone, Debug)]
struct Candidate {
    ty: Type,
    column: usize,
}

/// One candidate per distinct arguments-unknown minimum of each column.
///
/// `None` when some cell is not a single-constructor union; the caller
/// normalizes with `expand` first, so that cannot happen on a live path.
fn candidate_checks(table: &MatchTable) -> Option<Vec<Candidate>> {
    let mut candidates: Vec<Candidate> = Vec::new();
    for column in 0..table.column_count() {
        let mut patterns = Vec::with_capacity(table.row_count());
        for row in table.rows() {
            patterns.push(row[column].single_type()?.clone());
        }
        let start = candidates.len();
        for minimum in type_minima(&patterns) {
            let ty = minimum.make_arguments_unknown();
            let fresh = !candidates[start..].iter().any(|c| c.ty == ty);
            if fresh {
                candidates.push(Candidate { ty, column });
            }
        }
    }
    Some(candidates)
}

/// A check is skippable when the input refinement already forces its
/// outcome: narrowing the checked occurrence to the checked shape changes
/// nothing the input did not already guarantee.
fn is_skippable(table: &MatchTable, candidate: &Candidate) -> bool {
    let occurrence = &table.occurrences()[candidate.column];
    let forced = table
        .input()
        .replace_at(occurrence, &Union::single(candidate.ty.clone()));
    table.input().is_subtype_of(&forced)
}

/// Deterministic selection: the candidate whose column offers the fewest
/// distinct checks, ties broken by lowest column index, then by candidate
/// order. Correctness does not depend on this choice; tree shape and
/// compile time do.
fn pick<'a>(candidates: &[&'a Candidate]) -> &'a Candidate {
    let per_column = |column: usize| candidates.iter().filter(|c| c.column == column).count();
    candidates
        .iter()
        .copied()
        .min_by_key(|c| (per_column(c.column), c.column))
        .expect("candidate pool is non-empty")
}

fn specialized_success(table: &MatchTable, candidate: &Candidate) -> MatchTable {
    table
        .specialize_success(&candidate.ty, candidate.column)
        .expect("expanded table rows are single-constructor")
        .expand()
        .remove()
}

fn compile_table(table: &MatchTable) -> DecisionTree {
    trace!(
        rows = table.row_count(),
        columns = table.column_count(),
        "compiling match table"
    );
    if table.is_fail() {
        return DecisionTree::Fail;
    }
    if let Some(case) = table.success_case_index() {
        return DecisionTree::Success(case);
    }

    let candidates =
        candidate_checks(table).expect("expanded table rows are single-constructor");
    let skippable: Vec<&Candidate> = candidates
        .iter()
        .filter(|c| is_skippable(table, c))
        .collect();

    if !skippable.is_empty() {
        let candidate = pick(&skippable);
        debug!(check = %candidate.ty, column = candidate.column, "skipping forced check");
        return compile_table(&specialized_success(table, candidate));
    }

    let all: Vec<&Candidate> = candidates.iter().collect();
    let candidate = pick(&all);
    debug!(
        check = %candidate.ty,
        occurrence = %table.occurrences()[candidate.column],
        "emitting check"
    );
    let success = compile_table(&specialized_success(table, candidate));
    let fail = compile_table(
        &table
            .specialize_fail(&candidate.ty, candidate.column)
            .expect("expanded table rows are single-constructor"),
    );
    DecisionTree::Check {
        ty: candidate.ty.clone(),
        occurrence: table.occurrences()[candidate.column].clone(),
        success: Box::new(success),
        fail: Box::new(fail),
    }
}

/// Compile case patterns over an input bound into a decision tree.
///
/// `patterns[i]` is the top-level pattern of the case whose index is
/// `case_indices[i]`; earlier rows win, matching sequential testing. The
/// result dispatches to `Success(case)` for the first case whose pattern
/// covers the value, and to `Fail` when none does.
pub fn compile(input: Union, patterns: Vec<Union>, case_indices: Vec<i32>) -> DecisionTree {
    assert_eq!(
        patterns.len(),
        case_indices.len(),
        "one case index per pattern"
    );
    let table = MatchTable::root(input, patterns, case_indices);
    compile_table(&table.expand().remove())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsm_types::{Occurrence, PrimitiveKind};

    fn primitive(kind: PrimitiveKind) -> Union {
        Union::single(Type::Primitive(kind))
    }

    #[test]
    fn test_compile_empty_is_fail() {
        let tree = compile(Union::unknown(), vec![], vec![]);
        assert_eq!(tree, DecisionTree::Fail);
    }

    #[test]
    fn test_compile_irrefutable_case() {
        let tree = compile(Union::unknown(), vec![Union::unknown()], vec![0]);
        assert_eq!(tree, DecisionTree::Success(0));
    }

    #[test]
    fn test_compile_single_primitive() {
        let tree = compile(Union::unknown(), vec![primitive(PrimitiveKind::Number)], vec![0]);
        assert_eq!(
            tree,
            DecisionTree::Check {
                ty: Type::Primitive(PrimitiveKind::Number),
                occurrence: Occurrence::root(),
                success: Box::new(DecisionTree::Success(0)),
                fail: Box::new(DecisionTree::Fail),
            }
        );
    }

    #[test]
    fn test_skippable_check_emits_no_node() {
        // The input already pins the scrutinee to be a number, so the
        // number case needs no runtime test at all.
        let tree = compile(
            primitive(PrimitiveKind::Number),
            vec![primitive(PrimitiveKind::Number)],
            vec![4],
        );
        assert_eq!(tree, DecisionTree::Success(4));
    }

    #[test]
    fn test_shadowed_case_disappears() {
        let tree = compile(
            Union::unknown(),
            vec![
                primitive(PrimitiveKind::String),
                Union::single(Type::literal_string("a")),
            ],
            vec![0, 1],
        );
        // The literal case is unreachable behind the string case.
        match &tree {
            DecisionTree::Check { success, .. } => {
                assert_eq!(**success, DecisionTree::Success(0));
            }
            other => panic!("expected a check, got {other}"),
        }
        assert_eq!(tree.check_count(), 1);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let cases = vec![
            primitive(PrimitiveKind::Boolean),
            Union::single(Type::Tuple(vec![
                primitive(PrimitiveKind::String),
                Union::unknown(),
            ])),
            Union::single(Type::Array(primitive(PrimitiveKind::Number))),
            Union::unknown(),
        ];
        let first = compile(Union::unknown(), cases.clone(), vec![0, 1, 2, -1]);
        let second = compile(Union::unknown(), cases, vec![0, 1, 2, -1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tuple_case_splits_into_element_checks() {
        let pair = Union::single(Type::Tuple(vec![
            primitive(PrimitiveKind::String),
            primitive(PrimitiveKind::Number),
        ]));
        let tree = compile(Union::unknown(), vec![pair], vec![0]);
        // One outer tuple test plus one test per element.
        assert_eq!(tree.check_count(), 3);
        assert_eq!(tree.depth(), 3);
    }

    #[test]
    #[should_panic(expected = "one case index per pattern")]
    fn test_compile_rejects_mismatched_lengths() {
        compile(Union::unknown(), vec![Union::unknown()], vec![0, 1]);
    }
}
