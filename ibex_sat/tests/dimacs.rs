use ibex_sat::{config::Config, context::Context, reports::Report, structures::formula::Formula};

mod dimacs {
    use super::*;

    #[test]
    fn a_problem_reads_and_solves() {
        let formula = Formula::from_dimacs(
            "c an exclusive pair
p cnf 2 2
 1  2 0
-1 -2 0
",
        )
        .unwrap();

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));

        let witness = ctx.assignment().unwrap();
        assert!(witness["1"] != witness["2"]);
    }

    #[test]
    fn an_unterminated_final_clause_is_accepted() {
        let formula = Formula::from_dimacs("1 0\n-1").unwrap();
        assert_eq!(formula.clause_count(), 2);

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn header_counts_are_advisory() {
        let formula = Formula::from_dimacs("p cnf 99 99\n1 2 0\n").unwrap();
        assert_eq!(formula.atom_count(), 2);
        assert_eq!(formula.clause_count(), 1);
    }

    #[test]
    fn atoms_are_named_by_magnitude() {
        let formula = Formula::from_dimacs("-3 0\n").unwrap();
        assert!(formula.atom_of("3").is_some());
        assert!(formula.atom_of("-3").is_none());

        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
        assert_eq!(ctx.assignment().unwrap()["3"], false);
    }
}
