//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! ibex_sat is a small, transparent solver built on the classic DPLL loop: unit propagation to a
//! fixpoint, a heuristic decision, and chronological backtracking on conflict, with every internal
//! step open to inspection.
//!
//! ibex_sat is developed to help anyone curious to investigate satisfiability solving at the level
//! of individual assignments: the trail, the implication graph, and the solver's observation hooks
//! expose each step of a solve as it happens, and repeated solves of the same formula take
//! identical paths.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a [configuration](crate::config), which fixes the decision heuristic.
//! Formulas are built [programmatically](crate::structures::formula::Formula::add_clause) over
//! named atoms or read from a [DIMACS](crate::builder) source, and handed to
//! [solve](crate::context::Context::solve) by reference.
//!
//! Internally, and at a high level, a solve is a manipulation of a handful of structures in step
//! with one another.
//! Notably:
//! - A (partial) valuation is stored in an [atom database](crate::db::atom).
//! - The assignments which produced the valuation, in order and with their reasons, form the
//!   [trail](crate::db::trail).
//! - The causal relationships between assignments form the [implication graph](crate::graph).
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their
//!   representation (formulas, clauses, etc.)
//! - The [configuration](crate::config) to see which heuristics are supported.
//!
//! # Example
//!
//! ```rust
//! # use ibex_sat::config::Config;
//! # use ibex_sat::context::Context;
//! # use ibex_sat::reports::Report;
//! # use ibex_sat::structures::formula::Formula;
//! let mut formula = Formula::new();
//! let a = formula.literal("a", true);
//! let b = formula.literal("b", true);
//! let c = formula.literal("c", true);
//!
//! formula.add_clause(vec![a, b]).unwrap();
//! formula.add_clause(vec![a.negate(), c]).unwrap();
//! formula.add_clause(vec![b.negate(), c.negate()]).unwrap();
//!
//! let mut context = Context::from_config(Config::default());
//!
//! assert_eq!(context.solve(&formula), Ok(Report::Satisfiable));
//! assert!(formula.satisfied_on(context.atom_db.valuation()));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! As logging is only built on request, and further can be requested by level, logs are verbose.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs
//! related to [the implication graph](crate::graph) can be filtered with `RUST_LOG=graph …`.

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod graph;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
