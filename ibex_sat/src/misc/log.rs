/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library
and/or fixing issues.

Note, no log implementation is provided, and the correctness of a solve never
depends on logger state.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp).
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [decisions](crate::procedures::decision).
    pub const DECISION: &str = "decision";

    /// Logs related to [conflict resolution](crate::procedures::backtrack).
    pub const BACKTRACK: &str = "backtrack";

    /// Logs related to the [implication graph](crate::graph).
    pub const GRAPH: &str = "graph";

    /// Logs related to DIMACS parsing.
    pub const PARSE: &str = "parse";
}
