/*!
Boolean constraint propagation.

# Overview

Propagation scans the clauses of the formula in formula order, evaluating each
against the current valuation:

- A satisfied or unresolved clause is passed over.
- A unit clause forces the assignment of its sole unvalued literal, after
  which the scan restarts from the first clause.
  The restart keeps the procedure's observable behaviour independent of any
  clause indexing scheme, as each forced assignment is the first unit found in
  formula order.
- An unsatisfied clause is a conflict, recorded on the implication graph and
  surfaced to the caller.

Propagation terminates with [Ok] exactly when a full pass over the formula
finds no unit and no conflict.
*/

use crate::{
    context::Context,
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseIndex, ClauseStatus},
        formula::Formula,
        literal::Literal,
    },
    types::err::{self, InvariantError},
};

impl Context {
    /// Propagates the consequences of the current trail through the formula.
    ///
    /// - `Ok(())` when a fixpoint was reached without conflict.
    /// - `Err(BCPError::Conflict)` when some clause became empty, in which
    ///   case the conflict is recorded on the implication graph.
    /// - `Err(BCPError::Invariant)` only on a defect in the library.
    pub fn bcp(&mut self, formula: &Formula) -> Result<(), err::BCPError> {
        self.observe_pre_bcp();
        let result = self.bcp_internal(formula);
        self.observe_post_bcp();
        result
    }

    fn bcp_internal(&mut self, formula: &Formula) -> Result<(), err::BCPError> {
        'scan: loop {
            for (index, clause) in formula.clauses().enumerate() {
                match clause.status_on(self.atom_db.valuation()) {
                    ClauseStatus::Satisfied | ClauseStatus::Unresolved => {}

                    ClauseStatus::Unsatisfied => {
                        log::trace!(target: targets::PROPAGATION, "Conflict with clause {index}: {clause}");
                        self.graph.mark_conflict(index, clause, self.level)?;
                        return Err(err::BCPError::Conflict(index));
                    }

                    ClauseStatus::Unit(literal) => {
                        log::trace!(target: targets::PROPAGATION, "Clause {index} forces {literal}");
                        self.record_forced_assignment(literal, index, clause)?;
                        self.counters.total_propagations += 1;
                        continue 'scan;
                    }
                }
            }

            return Ok(());
        }
    }

    /// Records a forced assignment on the valuation, the trail, and the
    /// implication graph, in step.
    pub(crate) fn record_forced_assignment(
        &mut self,
        literal: Literal,
        antecedent: ClauseIndex,
        clause: &Clause,
    ) -> Result<(), InvariantError> {
        if !self.atom_db.set_value(literal, self.level) {
            return Err(InvariantError::RepeatAssignment(literal.atom()));
        }

        self.trail.push(crate::db::trail::Assignment {
            literal,
            level: self.level,
            source: crate::db::trail::AssignmentSource::Forced(antecedent),
        });

        self.graph
            .record_forced(literal, self.level, antecedent, clause)?;
        Ok(())
    }
}
