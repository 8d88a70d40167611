//! Clauses, aka. collections of literals, interpreted as the disjunction of
//! those literals.
//!
//! Clauses are immutable once built, and construction enforces two policies:
//!
//! - The empty clause is rejected, as it is unsatisfiable on every valuation.
//! - Tautological clauses (those containing complementary literals) are
//!   rejected as malformed input.
//!
//! Duplicate literals are removed during construction, keeping the first
//! occurrence of each.
//!
//! On a valuation a clause has exactly one of four statuses, given by
//! [status_on](Clause::status_on):
//!
//! ```rust
//! # use ibex_sat::structures::clause::{Clause, ClauseStatus};
//! # use ibex_sat::structures::literal::Literal;
//! let p_or_q = Clause::new(vec![Literal::new(0, true), Literal::new(1, true)]).unwrap();
//!
//! let valuation = vec![Some(false), None];
//! assert_eq!(p_or_q.status_on(&valuation), ClauseStatus::Unit(Literal::new(1, true)));
//!
//! let valuation = vec![Some(false), Some(false)];
//! assert_eq!(p_or_q.status_on(&valuation), ClauseStatus::Unsatisfied);
//! ```

use crate::{
    structures::{literal::Literal, valuation::Valuation},
    types::err::FormulaError,
};

/// An index into the clauses of a formula, in formula order.
pub type ClauseIndex = usize;

/// An immutable disjunction of literals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// The literals of the clause, in the order given, first occurrences only.
    literals: Vec<Literal>,
}

/// The status of a clause on some valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// Some literal of the clause is satisfied.
    Satisfied,

    /// Every literal of the clause is falsified. \
    /// During a solve this is a conflict.
    Unsatisfied,

    /// Every literal except the contained literal is falsified, and the
    /// contained literal has no value. \
    /// During a solve the contained literal is a forced assignment.
    Unit(Literal),

    /// None of the above: at least two literals have no value, and no literal
    /// is satisfied.
    Unresolved,
}

impl Clause {
    /// A clause from the given literals.
    ///
    /// Duplicate literals are dropped.
    /// An error is returned for the empty clause and for tautological clauses.
    pub fn new(literals: Vec<Literal>) -> Result<Self, FormulaError> {
        if literals.is_empty() {
            return Err(FormulaError::EmptyClause);
        }

        let mut unique: Vec<Literal> = Vec::with_capacity(literals.len());
        for literal in literals {
            if unique.iter().any(|seen| seen.complements(&literal)) {
                return Err(FormulaError::Tautology);
            }
            if !unique.contains(&literal) {
                unique.push(literal);
            }
        }

        Ok(Clause { literals: unique })
    }

    /// An iterator over the literals of the clause, in clause order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// True when the clause contains the given literal.
    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The status of the clause on the given valuation.
    pub fn status_on(&self, valuation: &(impl Valuation + ?Sized)) -> ClauseStatus {
        let mut unvalued: Option<Literal> = None;

        for literal in &self.literals {
            match valuation.value_of_literal(literal) {
                Some(true) => return ClauseStatus::Satisfied,

                Some(false) => {}

                None => match unvalued {
                    None => unvalued = Some(*literal),
                    Some(_) => return ClauseStatus::Unresolved,
                },
            }
        }

        match unvalued {
            None => ClauseStatus::Unsatisfied,
            Some(literal) => ClauseStatus::Unit(literal),
        }
    }

    /// True when some literal of the clause is satisfied on the valuation.
    pub fn satisfied_on(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        self.literals
            .iter()
            .any(|literal| valuation.value_of_literal(literal) == Some(true))
    }

    /// True when every literal of the clause is falsified on the valuation.
    pub fn unsatisfiable_on(&self, valuation: &(impl Valuation + ?Sized)) -> bool {
        self.literals
            .iter()
            .all(|literal| valuation.value_of_literal(literal) == Some(false))
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut literals = self.literals.iter();
        if let Some(first) = literals.next() {
            write!(f, "{first}")?;
        }
        for literal in literals {
            write!(f, " {literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_policies() {
        assert_eq!(Clause::new(vec![]), Err(FormulaError::EmptyClause));

        let p = Literal::new(0, true);
        assert_eq!(
            Clause::new(vec![p, p.negate()]),
            Err(FormulaError::Tautology)
        );

        let q = Literal::new(1, false);
        let dup = Clause::new(vec![p, q, p]).unwrap();
        assert_eq!(dup.size(), 2);
    }

    #[test]
    fn status_transitions() {
        let p = Literal::new(0, true);
        let not_q = Literal::new(1, false);
        let clause = Clause::new(vec![p, not_q]).unwrap();

        assert_eq!(clause.status_on(&vec![None, None]), ClauseStatus::Unresolved);
        assert_eq!(
            clause.status_on(&vec![Some(false), None]),
            ClauseStatus::Unit(not_q)
        );
        assert_eq!(
            clause.status_on(&vec![None, Some(false)]),
            ClauseStatus::Satisfied
        );
        assert_eq!(
            clause.status_on(&vec![Some(false), Some(true)]),
            ClauseStatus::Unsatisfied
        );
    }
}
