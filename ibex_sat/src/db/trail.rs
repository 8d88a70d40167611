//! The trail: the ordered record of assignments on the current search path.
//!
//! Insertion order is causal/temporal order, a variable appears at most once
//! at any time, and undoing an assignment pops from the end.
//!
//! Each assignment is tagged with the decision level it was made at and with
//! its [source](AssignmentSource): the antecedent clause which forced it, or a
//! marker that it was a free decision (and, if so, whether its complement has
//! already been tried at this point in the search).

use crate::{
    db::LevelIndex,
    structures::{clause::ClauseIndex, literal::Literal},
};

/// The immediate reason an assignment holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentSource {
    /// A free decision of the heuristic.
    ///
    /// `flipped` is true when the assignment is the second branch at its
    /// level, i.e. when the complementary value has already been exhausted.
    Decision {
        /// Whether the complementary value was already tried.
        flipped: bool,
    },

    /// A consequence of boolean constraint propagation, forced by the indexed
    /// clause.
    Forced(ClauseIndex),
}

/// A literal bound at a level for a reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Assignment {
    /// The atom-value bind, represented as a literal.
    pub literal: Literal,

    /// The decision level the bind was made at.
    pub level: LevelIndex,

    /// The immediate reason for the bind.
    pub source: AssignmentSource,
}

impl Assignment {
    /// True when the assignment is a free decision.
    pub fn is_decision(&self) -> bool {
        matches!(self.source, AssignmentSource::Decision { .. })
    }

    /// The antecedent clause of the assignment, if it was forced.
    pub fn antecedent(&self) -> Option<ClauseIndex> {
        match self.source {
            AssignmentSource::Forced(index) => Some(index),
            AssignmentSource::Decision { .. } => None,
        }
    }
}

/// The ordered record of assignments.
#[derive(Debug, Default)]
pub struct Trail {
    assignments: Vec<Assignment>,
}

impl Trail {
    /// Stores an assignment at the end of the trail.
    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Removes and returns the most recent assignment, if one exists.
    pub fn pop(&mut self) -> Option<Assignment> {
        self.assignments.pop()
    }

    /// The most recent assignment, if one exists.
    pub fn last(&self) -> Option<&Assignment> {
        self.assignments.last()
    }

    /// The assignment at the given position, if one exists.
    pub fn get(&self, position: usize) -> Option<&Assignment> {
        self.assignments.get(position)
    }

    /// A count of assignments on the trail.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// True when no assignment is on the trail.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// An iterator over the assignments of the trail, in temporal order.
    pub fn assignments(&self) -> impl Iterator<Item = &Assignment> {
        self.assignments.iter()
    }

    /// An iterator over the literals of the trail, in temporal order.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.assignments.iter().map(|assignment| assignment.literal)
    }

    /// The position of the most recent free decision, if one exists.
    pub fn last_decision_position(&self) -> Option<usize> {
        self.assignments
            .iter()
            .rposition(|assignment| assignment.is_decision())
    }

    /// Removes every assignment, leaving an empty trail.
    pub fn clear(&mut self) {
        self.assignments.clear();
    }
}
