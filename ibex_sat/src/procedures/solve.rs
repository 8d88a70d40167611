/*!
The solve procedure: the driver loop.

# Overview

A solve is a loop over three phases:

```text
              ┌──────────────┐
   start ───► │ Propagating  │ ◄──────────────┐
              └──────┬───────┘                │
            conflict │ fixpoint               │ decision made
          ┌──────────┴─────────┐              │ or flipped
          ▼                    ▼              │
   ┌────────────┐        ┌──────────┐         │
   │ Conflicted │        │ Deciding │ ────────┘
   └─────┬──────┘        └────┬─────┘
         │ nothing to flip    │ formula satisfied
         ▼                    ▼
   Unsatisfiable         Satisfiable
```

Propagation runs to fixpoint, then either the formula is satisfied, or a
decision opens a fresh level, or a conflict is resolved by flipping a
decision.
Termination is guaranteed as the flipped marking ensures no trail prefix
recurs.
*/

use std::collections::BTreeMap;

use crate::{
    context::{Context, ContextState},
    reports::Report,
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// The phase of the driver loop.
enum Phase {
    Propagating,
    Deciding,
    Conflicted,
}

impl Context {
    /// Determines the satisfiability of the given formula.
    ///
    /// Any state from an earlier solve is discarded first.
    /// On [Report::Satisfiable] a witnessing
    /// [assignment](Context::assignment) is retained, on
    /// [Report::Unsatisfiable] the trail and the graph are left empty.
    pub fn solve(&mut self, formula: &Formula) -> Result<Report, ErrorKind> {
        self.refresh(formula);
        let mut phase = Phase::Propagating;

        loop {
            self.counters.total_iterations += 1;

            match phase {
                Phase::Propagating => match self.bcp(formula) {
                    Ok(()) => phase = Phase::Deciding,
                    Err(err::BCPError::Conflict(_)) => phase = Phase::Conflicted,
                    Err(err::BCPError::Invariant(e)) => return Err(e.into()),
                },

                Phase::Conflicted => {
                    self.counters.total_conflicts += 1;
                    if self.resolve_conflict()? {
                        phase = Phase::Propagating;
                    } else {
                        self.state = ContextState::Unsatisfiable;
                        break;
                    }
                }

                Phase::Deciding => {
                    if formula.satisfied_on(self.atom_db.valuation()) {
                        self.witness = Some(self.witness_map(formula));
                        self.state = ContextState::Satisfiable;
                        break;
                    }

                    if self.atom_db.unvalued_count() == 0 {
                        // Full valuation, unsatisfied formula, no conflict
                        // from BCP: impossible by construction.
                        return Err(err::InvariantError::FullValuationUnsatisfied.into());
                    }

                    self.make_decision(formula)?;
                    phase = Phase::Propagating;
                }
            }
        }

        Ok(self.report())
    }

    /// The valued atoms of the current valuation, keyed by external name.
    fn witness_map(&self, formula: &Formula) -> BTreeMap<String, bool> {
        let mut witness = BTreeMap::new();
        for (atom, value) in self.atom_db.valuation().iter().enumerate() {
            if let Some(value) = value {
                witness.insert(formula.name_of(atom as u32).to_owned(), *value);
            }
        }
        witness
    }
}
