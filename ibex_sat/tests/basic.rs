use ibex_sat::{config::Config, context::Context, reports::Report, structures::formula::Formula};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut formula = Formula::new();
        let p = formula.literal("p", true);
        formula.add_clause(vec![p]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert_eq!(ctx.assignment().unwrap()["p"], true);
    }

    #[test]
    fn empty_formula() {
        let formula = Formula::new();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert!(ctx.assignment().unwrap().is_empty());
    }

    // (x1 v x2) ^ (-x1 v -x2) is satisfied exactly when the values differ.
    #[test]
    fn exclusive_pair() {
        let mut formula = Formula::new();
        let x1 = formula.literal("x1", true);
        let x2 = formula.literal("x2", true);
        formula.add_clause(vec![x1, x2]).unwrap();
        formula.add_clause(vec![x1.negate(), x2.negate()]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));

        let witness = ctx.assignment().unwrap();
        assert!(witness["x1"] != witness["x2"]);
        assert!(formula.satisfied_on(ctx.atom_db.valuation()));
    }

    // (x1) ^ (-x1) conflicts at level zero, with no decision to flip.
    #[test]
    fn contradictory_units() {
        let mut formula = Formula::new();
        let x1 = formula.literal("x1", true);
        formula.add_clause(vec![x1]).unwrap();
        formula.add_clause(vec![x1.negate()]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.assignment(), None);
        assert!(ctx.trail.is_empty());
        assert_eq!(ctx.graph.node_count(), 0);
    }

    // Units force -x1 and -x2, emptying (x1 v x2) without any decision.
    #[test]
    fn units_empty_a_clause() {
        let mut formula = Formula::new();
        let x1 = formula.literal("x1", true);
        let x2 = formula.literal("x2", true);
        formula.add_clause(vec![x1, x2]).unwrap();
        formula.add_clause(vec![x1.negate()]).unwrap();
        formula.add_clause(vec![x2.negate()]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.counters.total_conflicts, 1);
        assert_eq!(ctx.counters.total_backtracks, 0);
    }

    #[test]
    fn backtracking_is_exercised() {
        // Satisfiable only with x1 false, though x1 true is tried first.
        let mut formula = Formula::new();
        let x1 = formula.literal("x1", true);
        let x2 = formula.literal("x2", true);
        formula.add_clause(vec![x1.negate(), x2]).unwrap();
        formula.add_clause(vec![x1.negate(), x2.negate()]).unwrap();
        formula.add_clause(vec![x1, x2]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert!(ctx.counters.total_backtracks > 0);
        assert_eq!(ctx.assignment().unwrap()["x1"], false);
    }

    #[test]
    fn a_context_solves_repeatedly() {
        let mut sat = Formula::new();
        let p = sat.literal("p", true);
        sat.add_clause(vec![p]).unwrap();

        let mut unsat = Formula::new();
        let q = unsat.literal("q", true);
        unsat.add_clause(vec![q]).unwrap();
        unsat.add_clause(vec![q.negate()]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&sat), Ok(Report::Satisfiable));
        assert_eq!(ctx.solve(&unsat), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.assignment(), None);
        assert_eq!(ctx.solve(&sat), Ok(Report::Satisfiable));
        assert_eq!(ctx.assignment().unwrap()["p"], true);
    }

    #[test]
    fn witness_is_idempotent() {
        let mut formula = Formula::new();
        let p = formula.literal("p", true);
        let q = formula.literal("q", true);
        formula.add_clause(vec![p, q]).unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));

        let first = ctx.assignment().unwrap().clone();
        let second = ctx.assignment().unwrap().clone();
        assert_eq!(first, second);
    }
}
