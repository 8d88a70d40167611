//! (The internal representation of) an atom, aka. a 'variable'.
//!
//! - 'Internal' atoms are used within a context, and index directly into the
//!   valuation, the trail, and the implication graph.
//! - 'External' atoms are used during interaction with a context, e.g. when
//!   providing a formula as input or reading a witnessing assignment. \
//!   An external atom is a string of non-whitespace characters which does not
//!   begin with '-' (a minus sign). \
//!   Examples: `p`, `atom_one`, `96`.
//!
//! Internal atoms of a formula are exactly [0..*m*) for some *m*, so the atoms
//! of a formula may be used as the indices of a structure without taking too
//! much space.
//!
//! The external representation of an atom is stored in the
//! [formula](crate::structures::formula::Formula) the atom belongs to.

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited to keep conversion to a signed (DIMACS style) representation safe.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs() - 1;
