//! Match table and decision-tree compiler for tsm.
//!
//! The compiler turns a list of typed patterns over a scrutinee into a
//! decision tree of single-step runtime shape checks that dispatches to the
//! first matching case, with the same semantics as testing every pattern in
//! sequence:
//! - `table`: the rectangular match-table abstraction and its algebraic
//!   operations (specialize on success/fail, expand, remove)
//! - `tree`: the decision-tree output sum
//! - `compile`: candidate-check construction, the skippable-check fast
//!   path, the selection heuristic, and the recursive compiler
//!
//! Everything is pure: tables and trees are immutable, each operation
//! returns a fresh value, and compilation is a deterministic function of
//! its inputs.

pub mod table;
pub use table::{MatchTable, DEFAULT_CASE};

pub mod tree;
pub use tree::DecisionTree;

pub mod compile;
pub use compile::compile;
