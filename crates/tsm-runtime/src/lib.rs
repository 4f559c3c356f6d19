//! Reference runtime semantics for tsm decision trees.
//!
//! The compiler's output is consumed by a back-end that prints
//! host-language tests; this crate is the executable description of what
//! that emitted code does:
//! - `value`: a JavaScript-like value model
//! - `eval`: the single-step shape tests, occurrence walking with
//!   element/value loops, decision-tree evaluation, and the sequential
//!   reference matcher
//!
//! Decision-tree dispatch and sequential first-match testing agree for
//! every value inside the declared input bound; the tests exercise exactly
//! that equivalence.

pub mod value;
pub use value::Value;

pub mod eval;
pub use eval::{dispatch, evaluate, match_sequential, value_in_type, value_in_union};
