/*!
The context: the solver state to which formulas are given and within which
solves take place.

A context owns the trail, the implication graph, the valuation, the decision
level counter, and the configuration (including the heuristic, fixed at
construction).
Each call to [solve](crate::context::Context::solve) builds this state afresh,
and the state of the most recent solve is retained for inspection at
termination.

# Example

```rust
# use ibex_sat::config::Config;
# use ibex_sat::context::Context;
# use ibex_sat::reports::Report;
# use ibex_sat::structures::formula::Formula;
let mut formula = Formula::new();
let p = formula.literal("p", true);
let q = formula.literal("q", true);

formula.add_clause(vec![p, q]).unwrap();
formula.add_clause(vec![p.negate(), q.negate()]).unwrap();

let mut context = Context::from_config(Config::default());
assert_eq!(context.solve(&formula), Ok(Report::Satisfiable));

let witness = context.assignment().unwrap();
assert!(witness["p"] != witness["q"]);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;

use std::collections::BTreeMap;

use crate::{
    config::Config,
    db::{atom::AtomDB, trail::Trail, LevelIndex},
    graph::ImplicationGraph,
    procedures::decision::DecisionSource,
    reports::Report,
    structures::formula::Formula,
};

use callbacks::Callbacks;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// No solve has taken place.
    Input,

    /// A solve is in progress.
    Solving,

    /// The most recent solve found a satisfying assignment.
    Satisfiable,

    /// The most recent solve exhausted every assignment.
    Unsatisfiable,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
        }
    }
}

/// A solver context: configuration, per-solve state, and observation points.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the most recent solve.
    pub counters: Counters,

    /// The atom database: valuation and per-atom levels.
    pub atom_db: AtomDB,

    /// The trail of the most recent solve.
    pub trail: Trail,

    /// The implication graph of the most recent solve.
    pub graph: ImplicationGraph,

    /// The status of the context.
    pub state: ContextState,

    /// The current decision level.
    pub(crate) level: LevelIndex,

    /// The registered observer hooks.
    pub(crate) callbacks: Callbacks,

    /// The external decision source for the manual heuristic.
    pub(crate) decision_source: Option<Box<dyn DecisionSource>>,

    /// The witnessing assignment of the most recent satisfiable solve.
    pub(crate) witness: Option<BTreeMap<String, bool>>,
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            atom_db: AtomDB::default(),
            trail: Trail::default(),
            graph: ImplicationGraph::default(),
            state: ContextState::Input,
            level: 0,
            callbacks: Callbacks::default(),
            decision_source: None,
            witness: None,
        }
    }

    /// Registers the external decision source used by the manual heuristic.
    pub fn set_decision_source(&mut self, source: Box<dyn DecisionSource>) {
        self.decision_source = Some(source);
    }

    /// The current decision level.
    pub fn decision_level(&self) -> LevelIndex {
        self.level
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        match self.state {
            ContextState::Input | ContextState::Solving => Report::Unknown,
            ContextState::Satisfiable => Report::Satisfiable,
            ContextState::Unsatisfiable => Report::Unsatisfiable,
        }
    }

    /// The witnessing assignment of the most recent solve, by atom name.
    ///
    /// `Some` exactly when the most recent solve reported satisfiable, and
    /// stable across repeated calls.
    /// Atoms left unvalued when the formula was satisfied early are omitted.
    pub fn assignment(&self) -> Option<&BTreeMap<String, bool>> {
        match self.state {
            ContextState::Satisfiable => self.witness.as_ref(),
            _ => None,
        }
    }

    /// Discards any per-solve state, leaving a fresh solver for the given
    /// formula.
    pub(crate) fn refresh(&mut self, formula: &Formula) {
        self.atom_db = AtomDB::new(formula.atom_count());
        self.trail.clear();
        self.graph.clear();
        self.counters = Counters::default();
        self.level = 0;
        self.witness = None;
        self.state = ContextState::Solving;
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
