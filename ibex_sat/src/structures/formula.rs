//! Formulas, aka. sequences of clauses, interpreted as the conjunction of
//! those clauses.
//!
//! A formula owns the external (string) representation of its atoms: the
//! atoms of a formula are interned in order of first registration, and a
//! formula is the only way to move between an [Atom] and its name.
//!
//! Clause order is preserved, as the order affects the scan order of
//! [bcp](crate::procedures::bcp) and so the trace of a solve, though never its
//! verdict.
//!
//! ```rust
//! # use ibex_sat::structures::formula::Formula;
//! # use ibex_sat::structures::literal::Literal;
//! let mut formula = Formula::new();
//!
//! let p = formula.atom("p");
//! let q = formula.atom("q");
//!
//! formula.add_clause(vec![Literal::new(p, true), Literal::new(q, true)]).unwrap();
//! formula.add_clause(vec![Literal::new(p, false)]).unwrap();
//!
//! assert_eq!(formula.clause_count(), 2);
//! assert_eq!(formula.atom_count(), 2);
//! assert_eq!(formula.name_of(q), "q");
//! ```

use std::collections::HashMap;

use crate::{
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::{Clause, ClauseIndex},
        literal::Literal,
        valuation::Valuation,
    },
    types::err::FormulaError,
};

/// An immutable-per-solve conjunction of clauses over named atoms.
#[derive(Clone, Debug, Default)]
pub struct Formula {
    /// The clauses of the formula, in the order added.
    clauses: Vec<Clause>,

    /// External names, indexed by atom.
    names: Vec<String>,

    /// The inverse of `names`.
    atoms: HashMap<String, Atom>,
}

impl Formula {
    /// An empty formula, satisfied by the empty valuation.
    pub fn new() -> Self {
        Formula::default()
    }

    /// The atom named by the given string, interning the name if it is fresh.
    ///
    /// # Panics
    /// If more than [ATOM_MAX] atoms are requested.
    pub fn atom(&mut self, name: &str) -> Atom {
        match self.atoms.get(name) {
            Some(atom) => *atom,
            None => {
                let atom = self.names.len() as Atom;
                assert!(atom <= ATOM_MAX, "atoms exhausted");
                self.names.push(name.to_owned());
                self.atoms.insert(name.to_owned(), atom);
                atom
            }
        }
    }

    /// A literal over the atom named by the given string, interning the name
    /// if it is fresh.
    pub fn literal(&mut self, name: &str, polarity: bool) -> Literal {
        Literal::new(self.atom(name), polarity)
    }

    /// The atom named by the given string, if the name has been registered.
    pub fn atom_of(&self, name: &str) -> Option<Atom> {
        self.atoms.get(name).copied()
    }

    /// The external name of the given atom.
    ///
    /// # Panics
    /// If the atom does not belong to the formula.
    pub fn name_of(&self, atom: Atom) -> &str {
        &self.names[atom as usize]
    }

    /// Adds a clause over the given literals to the formula.
    ///
    /// Construction policies are as [Clause::new]: the empty clause and
    /// tautological clauses are rejected, duplicate literals are dropped.
    pub fn add_clause(&mut self, literals: Vec<Literal>) -> Result<ClauseIndex, FormulaError> {
        for literal in &literals {
            if (literal.atom() as usize) >= self.names.len() {
                return Err(FormulaError::UnregisteredAtom(literal.atom()));
            }
        }

        let clause = Clause::new(literals)?;
        self.clauses.push(clause);
        Ok(self.clauses.len() - 1)
    }

    /// An iterator over the clauses of the formula, in formula order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The clause at the given index.
    pub fn clause(&self, index: ClauseIndex) -> Option<&Clause> {
        self.clauses.get(index)
    }

    /// The number of clauses in the formula.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// The number of (distinct) atoms mentioned by the formula.
    pub fn atom_count(&self) -> usize {
        self.names.len()
    }

    /// True when every clause of the formula is satisfied on the valuation.
    pub fn satisfied_on(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut clauses = self.clauses.iter();
        if let Some(first) = clauses.next() {
            write!(f, "({first})")?;
        }
        for clause in clauses {
            write!(f, " ({clause})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut formula = Formula::new();
        let p = formula.atom("p");
        let q = formula.atom("q");
        assert_ne!(p, q);
        assert_eq!(formula.atom("p"), p);
        assert_eq!(formula.atom_of("q"), Some(q));
        assert_eq!(formula.atom_of("r"), None);
    }

    #[test]
    fn unregistered_atoms_are_rejected() {
        let mut formula = Formula::new();
        let result = formula.add_clause(vec![Literal::new(3, true)]);
        assert_eq!(result, Err(FormulaError::UnregisteredAtom(3)));
    }
}
