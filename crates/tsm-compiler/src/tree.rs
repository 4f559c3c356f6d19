//! The decision-tree output sum.
//!
//! A tree is what a back-end consumes: `Fail` (no case matched; emit the
//! default branch or a trap), `Success` (dispatch to a case body), or
//! `Check` (a single-step shape test at one occurrence, with a branch for
//! each outcome). The type inside a `Check` is always in arguments-unknown
//! form: it commits to an outer shape and nothing below it.

use serde::Serialize;
use std::fmt;
use tsm_types::{Occurrence, Type};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum DecisionTree {
    Fail,
    Success(i32),
    Check {
        ty: Type,
        occurrence: Occurrence,
        success: Box<DecisionTree>,
        fail: Box<DecisionTree>,
    },
}

impl DecisionTree {
    /// Number of check nodes in the tree.
    pub fn check_count(&self) -> usize {
        match self {
            DecisionTree::Fail | DecisionTree::Success(_) => 0,
            DecisionTree::Check { success, fail, .. } => {
                1 + success.check_count() + fail.check_count()
            }
        }
    }

    /// Longest chain of checks any dispatch can take.
    pub fn depth(&self) -> usize {
        match self {
            DecisionTree::Fail | DecisionTree::Success(_) => 0,
            DecisionTree::Check { success, fail, .. } => 1 + success.depth().max(fail.depth()),
        }
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            DecisionTree::Fail => writeln!(f, "{pad}fail"),
            DecisionTree::Success(case) => writeln!(f, "{pad}success({case})"),
            DecisionTree::Check {
                ty,
                occurrence,
                success,
                fail,
            } => {
                writeln!(f, "{pad}check {occurrence} is {ty}")?;
                success.fmt_indented(f, indent + 1)?;
                fail.fmt_indented(f, indent + 1)
            }
        }
    }
}

impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}
