//! The abstract elements of a solve and their representation.
//!
//! - An [atom](atom) is a variable, something to which a (boolean) value may be assigned.
//! - A [literal](literal) is an atom paired with a polarity.
//! - A [clause](clause) is a collection of literals, interpreted as their disjunction.
//! - A [formula](formula) is a sequence of clauses, interpreted as their conjunction.
//! - A [valuation](valuation) is a (partial) map from atoms to values.
//!
//! Atoms, literals, clauses, and formulas are immutable for the duration of a solve.
//! The mutable state of a solve (the trail, the implication graph) lives in
//! [db](crate::db) and [graph](crate::graph).

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;
