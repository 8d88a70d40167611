//! The mutable state of a solve.
//!
//! - The [atom database](atom) holds the current valuation, and the decision
//!   level at which each valued atom was valued.
//! - The [trail](trail) holds the ordered record of assignments, each tagged
//!   with its decision level and the source which forced it (if any).
//!
//! Both are rebuilt at the start of every solve and pruned on every
//! backtrack, and the trail is the single source of truth for the current
//! partial assignment.

pub mod atom;
pub mod trail;

/// A decision level, aka. a count of the free choices made so far on the
/// current search path.
///
/// Level zero is reserved for assignments made with no outstanding decisions.
pub type LevelIndex = u32;
