//! The atom database: the current valuation, and per-atom bookkeeping.

use crate::{
    db::LevelIndex,
    structures::{atom::Atom, literal::Literal, valuation::Valuation},
};

/// The valuation of a solve together with the decision level at which each
/// valued atom received its value.
///
/// Sized to the formula at the start of a solve and untouched by anything
/// other than the trail operations of the context.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// The current (partial) valuation, indexed by atom.
    valuation: Vec<Option<bool>>,

    /// The decision level of each valued atom, indexed by atom.
    levels: Vec<Option<LevelIndex>>,
}

impl AtomDB {
    /// A fresh database over `count` unvalued atoms.
    pub fn new(count: usize) -> Self {
        AtomDB {
            valuation: vec![None; count],
            levels: vec![None; count],
        }
    }

    /// The current valuation, as a slice indexed by atom.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// The value of the given atom, if it has one.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.value_of(atom)
    }

    /// The decision level of the given atom, if it is valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        *self.levels.get(atom as usize)?
    }

    /// A count of all atoms.
    pub fn atom_count(&self) -> usize {
        self.valuation.len()
    }

    /// A count of atoms without a value.
    pub fn unvalued_count(&self) -> usize {
        self.valuation.len() - self.valuation.valued_count()
    }

    /// Values the atom of the literal to agree with the literal's polarity, at
    /// the given level.
    ///
    /// Returns false when the atom already had a value, in which case nothing
    /// is changed: a repeat assignment is the caller's invariant to surface.
    pub fn set_value(&mut self, literal: Literal, level: LevelIndex) -> bool {
        let atom = literal.atom() as usize;
        match self.valuation[atom] {
            Some(_) => false,
            None => {
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = Some(level);
                true
            }
        }
    }

    /// Clears the value (and level) of the given atom.
    pub fn drop_value(&mut self, atom: Atom) {
        self.valuation[atom as usize] = None;
        self.levels[atom as usize] = None;
    }
}
