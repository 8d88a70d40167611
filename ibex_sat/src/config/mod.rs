/*!
Configuration of a context.

All configuration for a context is contained within the context, fixed at
construction, and reused across solves.

# Example

```rust
# use ibex_sat::config::{Config, Heuristic};
let config = Config {
    heuristic: Heuristic::Dlis,
};
assert_eq!(config.heuristic.to_string(), "dlis");
```
*/

/// The primary configuration structure.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// The decision heuristic used during a solve.
    pub heuristic: Heuristic,
}

/// The decision heuristic: a closed set of interchangeable strategies,
/// selected once at construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heuristic {
    /// Choose the unassigned atom whose name is lexicographically first, and
    /// assign it true.
    #[default]
    Lexicographic,

    /// Dynamic largest individual sum: choose the unassigned literal with the
    /// most occurrences across clauses not yet satisfied, and assign its atom
    /// the polarity of that literal.
    Dlis,

    /// Delegate to an externally supplied
    /// [decision source](crate::procedures::decision::DecisionSource).
    Manual,
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Heuristic::Lexicographic => write!(f, "lexicographic"),
            Heuristic::Dlis => write!(f, "dlis"),
            Heuristic::Manual => write!(f, "manual"),
        }
    }
}

impl std::str::FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "lexicographic" => Ok(Heuristic::Lexicographic),
            "dlis" => Ok(Heuristic::Dlis),
            "manual" => Ok(Heuristic::Manual),
            other => Err(format!("unknown heuristic: {other}")),
        }
    }
}
