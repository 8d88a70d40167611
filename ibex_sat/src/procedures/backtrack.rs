/*!
Chronological conflict resolution.

# Overview

On a conflict, the most recent decision whose complement is untried is found
by walking back along the trail:

- Every assignment above that decision is undone, the decision itself
  included, and the decision's complement is asserted in its place at the
  same level, marked as flipped.
- A decision already flipped has exhausted both values at its position, so
  the walk continues to the decision below it.
- No decision left to flip means the search space is exhausted and the
  formula is unsatisfiable, at which point the trail and the graph are
  drained.

The implication graph is rewound in step, so observers at the post-resolve
hook see a graph consistent with the trail.
*/

use crate::{
    context::Context,
    misc::log::targets,
    types::err::ErrorKind,
};

impl Context {
    /// Resolves the pending conflict by backtracking chronologically.
    ///
    /// - `Ok(true)` when some decision was flipped and the search continues.
    /// - `Ok(false)` when no decision was left to flip, i.e. the formula is
    ///   unsatisfiable.
    pub fn resolve_conflict(&mut self) -> Result<bool, ErrorKind> {
        self.observe_pre_resolve();
        let result = self.resolve_internal();
        self.observe_post_resolve();
        result
    }

    fn resolve_internal(&mut self) -> Result<bool, ErrorKind> {
        loop {
            let position = match self.trail.last_decision_position() {
                Some(position) => position,

                None => {
                    log::trace!(target: targets::BACKTRACK, "No decision to flip, search exhausted");
                    while let Some(assignment) = self.trail.pop() {
                        self.atom_db.drop_value(assignment.literal.atom());
                    }
                    self.graph.clear();
                    self.level = 0;
                    return Ok(false);
                }
            };

            // The position is from the trail, so the assignment exists.
            let decision = match self.trail.get(position) {
                Some(assignment) => *assignment,
                None => unreachable!("trail position {position} vanished"),
            };

            // Undo the decision and everything after it.
            while self.trail.len() > position {
                if let Some(assignment) = self.trail.pop() {
                    self.atom_db.drop_value(assignment.literal.atom());
                }
            }
            self.level = decision.level - 1;
            self.graph.undo_to(self.level);

            match decision.source {
                crate::db::trail::AssignmentSource::Decision { flipped: false } => {
                    let complement = decision.literal.negate();
                    log::trace!(target: targets::BACKTRACK, "Flipping {} to {complement} @ {}", decision.literal, decision.level);
                    self.level = decision.level;
                    self.push_decision(complement, true)?;
                    self.counters.total_backtracks += 1;
                    return Ok(true);
                }

                _ => {
                    // Both values tried at this position, walk further back.
                    log::trace!(target: targets::BACKTRACK, "{} exhausted @ {}", decision.literal, decision.level);
                    continue;
                }
            }
        }
    }
}
