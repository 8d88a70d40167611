/// Counts for various things which count, per solve.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all assignments forced by propagation.
    pub total_propagations: usize,

    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of backtracks, i.e. of conflicts recovered from by flipping or
    /// discarding a decision.
    pub total_backtracks: usize,

    /// The total number of iterations through the solve loop.
    pub total_iterations: usize,
}
