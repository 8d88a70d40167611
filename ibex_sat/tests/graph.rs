use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use ibex_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::ClauseStatus, formula::Formula},
};

// Satisfiable only with x1 false, with x1 true tried first, so a solve walks
// through propagation, conflict, and backtracking.
fn conflicted_formula() -> Formula {
    let mut formula = Formula::new();
    let x1 = formula.literal("x1", true);
    let x2 = formula.literal("x2", true);
    let x3 = formula.literal("x3", true);
    formula.add_clause(vec![x1.negate(), x2]).unwrap();
    formula.add_clause(vec![x2.negate(), x3]).unwrap();
    formula.add_clause(vec![x1.negate(), x3.negate()]).unwrap();
    formula.add_clause(vec![x1, x2]).unwrap();
    formula
}

mod graph {
    use super::*;

    #[test]
    fn decisions_are_unexplained_and_forced_assignments_are_explained() {
        let formula = Rc::new(conflicted_formula());
        let mut ctx = Context::from_config(Config::default());

        let checked = Rc::new(Cell::new(false));
        let flag = Rc::clone(&checked);
        ctx.set_callback_post_bcp(Box::new(move |view| {
            for (index, node) in view.graph.nodes().enumerate() {
                match node.antecedent {
                    None => assert!(view.graph.edges_to(index).is_empty()),
                    Some(_) => assert!(!view.graph.edges_to(index).is_empty()),
                }
            }
            flag.set(true);
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert!(checked.get());
    }

    #[test]
    fn no_atom_appears_twice_on_the_trail() {
        let formula = Rc::new(conflicted_formula());
        let mut ctx = Context::from_config(Config::default());

        ctx.set_callback_post_bcp(Box::new(move |view| {
            let mut seen = HashSet::new();
            for literal in view.trail.literals() {
                assert!(seen.insert(literal.atom()));
            }
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
    }

    // Replaying the trail checks each antecedent was unit at the instant its
    // assignment was made.
    #[test]
    fn antecedents_are_unit_at_assignment() {
        let formula = Rc::new(conflicted_formula());
        let observed = Rc::clone(&formula);
        let mut ctx = Context::from_config(Config::default());

        let atoms = formula.atom_count();
        ctx.set_callback_post_bcp(Box::new(move |view| {
            let mut replay: Vec<Option<bool>> = vec![None; atoms];
            for assignment in view.trail.assignments() {
                if let Some(antecedent) = assignment.antecedent() {
                    let clause = observed.clause(antecedent).unwrap();
                    assert_eq!(
                        clause.status_on(&replay),
                        ClauseStatus::Unit(assignment.literal)
                    );
                }
                replay[assignment.literal.atom() as usize] = Some(assignment.literal.polarity());
            }
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
    }

    #[test]
    fn the_conflict_node_explains_the_clash() {
        let formula = Rc::new(conflicted_formula());
        let observed = Rc::clone(&formula);
        let mut ctx = Context::from_config(Config::default());

        let conflicts = Rc::new(Cell::new(0));
        let counter = Rc::clone(&conflicts);
        ctx.set_callback_pre_resolve(Box::new(move |view| {
            let conflict = view.graph.conflict().expect("no conflict at pre-resolve");
            let clause = observed.clause(conflict.clause).unwrap();

            // Each literal of the clause is falsified by a recorded node.
            assert_eq!(conflict.sources.len(), clause.size());
            for source in &conflict.sources {
                let node = view.graph.node(*source).unwrap();
                assert!(clause.contains(&node.literal.negate()));
            }
            counter.set(counter.get() + 1);
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert!(conflicts.get() > 0);
    }

    // After a backtrack, neither the trail nor the graph holds anything above
    // the new level, and the conflict node is gone.
    #[test]
    fn backtracking_rewinds_trail_and_graph_together() {
        let formula = Rc::new(conflicted_formula());
        let mut ctx = Context::from_config(Config::default());

        ctx.set_callback_post_resolve(Box::new(move |view| {
            assert!(view.graph.conflict().is_none());
            assert!(view.trail.assignments().all(|a| a.level <= view.level));
            assert!(view.graph.nodes().all(|node| node.level <= view.level));
            assert_eq!(view.trail.len(), view.graph.node_count());
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
    }

    #[test]
    fn the_graph_is_drained_on_unsatisfiability() {
        let mut formula = Formula::new();
        let p = formula.literal("p", true);
        let q = formula.literal("q", true);
        formula.add_clause(vec![p, q]).unwrap();
        formula.add_clause(vec![p, q.negate()]).unwrap();
        formula.add_clause(vec![p.negate(), q]).unwrap();
        formula.add_clause(vec![p.negate(), q.negate()]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.graph.node_count(), 0);
        assert!(ctx.graph.conflict().is_none());
        assert!(ctx.trail.is_empty());
    }
}
