/*!
Decisions: choosing an unvalued atom and a value for it.

# Overview

Three heuristics, fixed by [configuration](crate::config::Heuristic) at
context construction:

- *Lexicographic*: the unvalued atom whose external name is least in
  lexicographic (byte) order, assigned true.
- *DLIS* (dynamic largest individual sum): over clauses not yet satisfied,
  the unvalued literal occurring in the most clauses, with ties broken in
  favour of the literal encountered first in a formula-order scan.
- *Manual*: delegation to an external [DecisionSource], with the response
  validated before use.
  An invalid response aborts the solve with a
  [DecisionError](crate::types::err::DecisionError).

Each heuristic is deterministic given the formula and the current valuation,
so repeated solves of the same formula take identical paths.
*/

use std::collections::HashMap;

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        atom::Atom, formula::Formula, literal::Literal, valuation::Valuation,
    },
    types::err::{self, ErrorKind, InvariantError},
};

/// An external source of decisions, consulted by the manual heuristic.
///
/// At each decision point the source receives every unvalued atom, paired
/// with its external name, and returns the name of an atom together with the
/// value to assign.
pub trait DecisionSource {
    /// Chooses a named atom and a value for it.
    fn decide(&mut self, unassigned: &[(Atom, &str)]) -> (String, bool);
}

impl<F> DecisionSource for F
where
    F: FnMut(&[(Atom, &str)]) -> (String, bool),
{
    fn decide(&mut self, unassigned: &[(Atom, &str)]) -> (String, bool) {
        self(unassigned)
    }
}

impl Context {
    /// Makes a decision with the configured heuristic and records it on the
    /// trail, the valuation, and the implication graph, at a fresh level.
    pub fn make_decision(&mut self, formula: &Formula) -> Result<Literal, ErrorKind> {
        let decision = match self.config.heuristic {
            crate::config::Heuristic::Lexicographic => self.choose_lexicographic(formula)?,
            crate::config::Heuristic::Dlis => self.choose_dlis(formula)?,
            crate::config::Heuristic::Manual => self.choose_manual(formula)?,
        };

        self.level += 1;
        log::trace!(target: targets::DECISION, "Decision {decision} @ {}", self.level);
        self.counters.total_decisions += 1;
        self.push_decision(decision, false)?;
        Ok(decision)
    }

    /// Records a (possibly flipped) decision at the current level.
    pub(crate) fn push_decision(
        &mut self,
        literal: Literal,
        flipped: bool,
    ) -> Result<(), InvariantError> {
        if !self.atom_db.set_value(literal, self.level) {
            return Err(InvariantError::RepeatAssignment(literal.atom()));
        }

        self.trail.push(crate::db::trail::Assignment {
            literal,
            level: self.level,
            source: crate::db::trail::AssignmentSource::Decision { flipped },
        });

        self.graph.record_decision(literal, self.level);
        Ok(())
    }

    /// The unvalued atom with the lexicographically least name, positive.
    fn choose_lexicographic(&self, formula: &Formula) -> Result<Literal, ErrorKind> {
        let chosen = self
            .atom_db
            .valuation()
            .unvalued_atoms()
            .min_by(|a, b| formula.name_of(*a).cmp(formula.name_of(*b)));

        match chosen {
            Some(atom) => Ok(Literal::new(atom, true)),
            None => Err(InvariantError::NoDecisionCandidate.into()),
        }
    }

    /// The unvalued literal with the most occurrences in unsatisfied clauses,
    /// ties broken by first encounter in a formula-order scan.
    fn choose_dlis(&self, formula: &Formula) -> Result<Literal, ErrorKind> {
        // Literal to (occurrence count, position of first encounter).
        let mut occurrences: HashMap<Literal, (usize, usize)> = HashMap::new();
        let mut position = 0;

        for clause in formula.clauses() {
            if clause.satisfied_on(self.atom_db.valuation()) {
                continue;
            }
            for literal in clause.literals() {
                if self.atom_db.value_of(literal.atom()).is_some() {
                    continue;
                }
                let entry = occurrences.entry(*literal).or_insert((0, position));
                entry.0 += 1;
                position += 1;
            }
        }

        let chosen = occurrences
            .iter()
            .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
            .map(|(literal, _)| *literal);

        match chosen {
            Some(literal) => Ok(literal),
            None => Err(InvariantError::NoDecisionCandidate.into()),
        }
    }

    /// A decision delegated to the registered external source, validated.
    fn choose_manual(&mut self, formula: &Formula) -> Result<Literal, ErrorKind> {
        let unassigned: Vec<(Atom, &str)> = self
            .atom_db
            .valuation()
            .unvalued_atoms()
            .map(|atom| (atom, formula.name_of(atom)))
            .collect();

        if unassigned.is_empty() {
            return Err(InvariantError::NoDecisionCandidate.into());
        }

        let source = match self.decision_source.as_mut() {
            Some(source) => source,
            None => return Err(err::DecisionError::NoSource.into()),
        };
        let (name, value) = source.decide(&unassigned);

        let atom = match formula.atom_of(&name) {
            Some(atom) => atom,
            None => return Err(err::DecisionError::UnknownAtom(name).into()),
        };
        if self.atom_db.value_of(atom).is_some() {
            return Err(err::DecisionError::AlreadyValued(name).into());
        }

        Ok(Literal::new(atom, value))
    }
}
