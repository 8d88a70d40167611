//! Valuations, aka. (partial) maps from atoms to values.
//!
//! The canonical representation of a valuation is a slice of optional
//! booleans, indexed by atom, with `None` marking an atom without a value.
//!
//! ```rust
//! # use ibex_sat::structures::valuation::Valuation;
//! let valuation = vec![Some(true), None, Some(false)];
//!
//! assert_eq!(valuation.value_of(0), Some(true));
//! assert_eq!(valuation.value_of(1), None);
//! assert_eq!(valuation.unvalued_atoms().collect::<Vec<_>>(), vec![1]);
//! ```

use crate::structures::{atom::Atom, literal::Literal};

/// Something which maps atoms to optional values.
pub trait Valuation {
    /// The value of the atom on the valuation, if it has one.
    fn value_of(&self, atom: Atom) -> Option<bool>;

    /// The value of a literal on the valuation.
    ///
    /// - `Some(true)` when the atom's value agrees with the polarity of the literal.
    /// - `Some(false)` when the values disagree.
    /// - `None` when the atom has no value.
    fn value_of_literal(&self, literal: &Literal) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// An iterator over atoms without a value, in atom order.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all atoms in the valuation.
    fn atom_count(&self) -> usize;

    /// A count of atoms with a value.
    fn valued_count(&self) -> usize;
}

impl Valuation for [Option<bool>] {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.get(atom as usize) {
            Some(value) => *value,
            None => None,
        }
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn valued_count(&self) -> usize {
        self.iter().filter(|value| value.is_some()).count()
    }
}

impl Valuation for Vec<Option<bool>> {
    fn value_of(&self, atom: Atom) -> Option<bool> {
        self.as_slice().value_of(atom)
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.as_slice().unvalued_atoms()
    }

    fn atom_count(&self) -> usize {
        self.len()
    }

    fn valued_count(&self) -> usize {
        self.as_slice().valued_count()
    }
}
