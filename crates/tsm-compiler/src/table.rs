//! The match table and its algebraic operations.
//!
//! A match table is a rectangular table of pattern unions: one column per
//! occurrence (a position in the scrutinee), one row per still-live case.
//! `input` is the static upper bound on the scrutinee at this point of the
//! compilation; it only ever narrows as the compiler descends.
//!
//! The operations with a single-constructor precondition
//! (`specialize_success`, `specialize_fail`) return `None` when the
//! precondition does not hold: a recoverable signal, not an error. The
//! compiler always normalizes with `expand` first, so a `None` reaching it
//! is an internal invariant violation.

use serde::Serialize;
use tsm_types::{Occurrence, Type, Union};

/// Case index reserved by front-ends for a default case.
pub const DEFAULT_CASE: i32 = -1;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MatchTable {
    input: Union,
    occurrences: Vec<Occurrence>,
    case_indices: Vec<i32>,
    rows: Vec<Vec<Union>>,
}

impl MatchTable {
    /// Build a table, checking the shape invariants: as many case indices
    /// as rows, and every row as wide as the occurrence list.
    pub fn new(
        input: Union,
        occurrences: Vec<Occurrence>,
        case_indices: Vec<i32>,
        rows: Vec<Vec<Union>>,
    ) -> Self {
        assert_eq!(case_indices.len(), rows.len());
        assert!(rows.iter().all(|row| row.len() == occurrences.len()));
        MatchTable {
            input,
            occurrences,
            case_indices,
            rows,
        }
    }

    /// The entry-point table: one column at the scrutinee itself, one row
    /// per case pattern.
    pub fn root(input: Union, patterns: Vec<Union>, case_indices: Vec<i32>) -> Self {
        let rows = patterns.into_iter().map(|pattern| vec![pattern]).collect();
        MatchTable::new(input, vec![Occurrence::root()], case_indices, rows)
    }

    pub fn input(&self) -> &Union {
        &self.input
    }

    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    pub fn case_indices(&self) -> &[i32] {
        &self.case_indices
    }

    pub fn rows(&self) -> &[Vec<Union>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.occurrences.len()
    }

    /// No row can match anymore.
    pub fn is_fail(&self) -> bool {
        self.rows.is_empty()
    }

    /// The matched case, once a single row has no constraints left.
    pub fn success_case_index(&self) -> Option<i32> {
        if self.rows.len() == 1 && self.occurrences.is_empty() {
            Some(self.case_indices[0])
        } else {
            None
        }
    }

    /// Restrict the table to the case where the value at column `column`
    /// has the outer constructor of `ty`.
    ///
    /// The column is replaced by one column per argument of `ty`, each
    /// extending the occurrence by the matching accessor. Rows whose
    /// pattern cannot have that constructor are dropped; surviving rows
    /// have their pattern's children spread across the new columns. The
    /// input bound is narrowed by the checked shape.
    pub fn specialize_success(&self, ty: &Type, column: usize) -> Option<MatchTable> {
        if column >= self.occurrences.len() {
            return None;
        }
        let check = ty.make_arguments_unknown();
        let arguments = check.arguments();
        let occurrence = &self.occurrences[column];

        let shaped = self
            .input
            .replace_at(occurrence, &Union::single(check.clone()));
        let input = self.input.intersect(&shaped);

        let mut occurrences = Vec::with_capacity(self.occurrences.len() - 1 + arguments.len());
        occurrences.extend_from_slice(&self.occurrences[..column]);
        for (accessor, _) in &arguments {
            occurrences.push(occurrence.child(accessor.clone()));
        }
        occurrences.extend_from_slice(&self.occurrences[column + 1..]);

        let mut case_indices = Vec::new();
        let mut rows = Vec::new();
        for (row, &case) in self.rows.iter().zip(&self.case_indices) {
            let pattern = row[column].single_type()?;
            if !pattern.make_arguments_unknown().is_subtype_of(&check) {
                continue;
            }
            let mut cells = Vec::with_capacity(occurrences.len());
            cells.extend_from_slice(&row[..column]);
            for (accessor, _) in &arguments {
                cells.push(pattern.access(accessor)?);
            }
            cells.extend_from_slice(&row[column + 1..]);
            case_indices.push(case);
            rows.push(cells);
        }

        Some(MatchTable::new(input, occurrences, case_indices, rows))
    }

    /// Restrict the table to rows that can still match when the value at
    /// column `column` does NOT have the outer constructor of `ty`.
    /// Columns, occurrences, and the input bound are untouched.
    pub fn specialize_fail(&self, ty: &Type, column: usize) -> Option<MatchTable> {
        if column >= self.occurrences.len() {
            return None;
        }
        let mut case_indices = Vec::new();
        let mut rows = Vec::new();
        for (row, &case) in self.rows.iter().zip(&self.case_indices) {
            let pattern = row[column].single_type()?;
            if !pattern.equal_constructor(ty) {
                case_indices.push(case);
                rows.push(row.clone());
            }
        }
        Some(MatchTable::new(
            self.input.clone(),
            self.occurrences.clone(),
            case_indices,
            rows,
        ))
    }

    /// Cartesian-explode union cells: one row per combination of members,
    /// every cell a singleton union afterwards. Case indices repeat across
    /// the rows a pattern explodes into. Rows with an empty cell match
    /// nothing and disappear.
    pub fn expand(&self) -> MatchTable {
        let mut case_indices = Vec::new();
        let mut rows = Vec::new();
        for (row, &case) in self.rows.iter().zip(&self.case_indices) {
            let mut combinations: Vec<Vec<Union>> = vec![Vec::with_capacity(row.len())];
            for cell in row {
                let mut next = Vec::with_capacity(combinations.len() * cell.len());
                for combination in &combinations {
                    for ty in cell.types() {
                        let mut extended = combination.clone();
                        extended.push(Union::single(ty.clone()));
                        next.push(extended);
                    }
                }
                combinations = next;
            }
            for combination in combinations {
                case_indices.push(case);
                rows.push(combination);
            }
        }
        MatchTable::new(
            self.input.clone(),
            self.occurrences.clone(),
            case_indices,
            rows,
        )
    }

    /// Drop rows statically shadowed by an earlier row: a row goes when
    /// some earlier kept row is a superunion of it in every cell.
    pub fn remove(&self) -> MatchTable {
        let mut case_indices: Vec<i32> = Vec::new();
        let mut rows: Vec<Vec<Union>> = Vec::new();
        'rows: for (row, &case) in self.rows.iter().zip(&self.case_indices) {
            for earlier in &rows {
                let shadowed = row
                    .iter()
                    .zip(earlier)
                    .all(|(cell, earlier_cell)| cell.is_subtype_of(earlier_cell));
                if shadowed {
                    continue 'rows;
                }
            }
            case_indices.push(case);
            rows.push(row.clone());
        }
        MatchTable::new(
            self.input.clone(),
            self.occurrences.clone(),
            case_indices,
            rows,
        )
    }
}
