//! Structural type lattice for the tsm match compiler.
//!
//! This crate provides the closed type algebra the match compiler operates
//! on, and every lattice operation the compiler needs:
//! - The data model (`Literal`, `PrimitiveKind`, `Type`, `Union`)
//! - Occurrences (`Accessor`, `Occurrence`) naming positions in a scrutinee
//! - Equality and subtyping (`relate`)
//! - Intersection (`intersect`)
//! - Canonicalization and extremal elements (`canon`)
//! - Accessor descent and replace-at-occurrence (`access`)
//!
//! Types are owned trees. The lattice is not recursive (no back references),
//! so plain ownership suffices; all operations return fresh values and never
//! mutate their inputs.

// Literal values and primitive kinds
pub mod literal;
pub use literal::{BigIntValue, Literal, PrimitiveKind};

// The core type and union representation
pub mod types;
pub use types::{FieldMap, ObjectField, Type, Union};

// Equality, constructor equality, and the subtype relation
pub mod relate;

// Intersection of types and unions
pub mod intersect;

// Canonicalization, dedup, minima and maxima
pub mod canon;
pub use canon::{type_maxima, type_minima};

// Accessors, occurrences, argument enumeration, replace-at
pub mod access;
pub use access::{Accessor, Occurrence};

// TypeScript-flavoured rendering of types and unions
pub mod display;
