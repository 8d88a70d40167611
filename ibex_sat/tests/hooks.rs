use std::cell::RefCell;
use std::rc::Rc;

use ibex_sat::{config::Config, context::Context, reports::Report, structures::formula::Formula};

fn backtracking_formula() -> Formula {
    let mut formula = Formula::new();
    let x1 = formula.literal("x1", true);
    let x2 = formula.literal("x2", true);
    formula.add_clause(vec![x1.negate(), x2]).unwrap();
    formula.add_clause(vec![x1.negate(), x2.negate()]).unwrap();
    formula.add_clause(vec![x1, x2]).unwrap();
    formula
}

mod hooks {
    use super::*;

    #[test]
    fn each_hook_fires_in_order() {
        let formula = backtracking_formula();
        let mut ctx = Context::from_config(Config::default());

        let events: Rc<RefCell<Vec<&'static str>>> = Rc::default();

        let log = Rc::clone(&events);
        ctx.set_callback_pre_bcp(Box::new(move |_| log.borrow_mut().push("pre_bcp")));
        let log = Rc::clone(&events);
        ctx.set_callback_post_bcp(Box::new(move |_| log.borrow_mut().push("post_bcp")));
        let log = Rc::clone(&events);
        ctx.set_callback_pre_resolve(Box::new(move |_| log.borrow_mut().push("pre_resolve")));
        let log = Rc::clone(&events);
        ctx.set_callback_post_resolve(Box::new(move |_| log.borrow_mut().push("post_resolve")));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));

        let events = events.borrow();
        assert!(events.contains(&"pre_resolve"));

        // Every BCP run is bracketed, and every resolution likewise.
        let mut pending_bcp = 0;
        let mut pending_resolve = 0;
        for event in events.iter() {
            match *event {
                "pre_bcp" => pending_bcp += 1,
                "post_bcp" => {
                    pending_bcp -= 1;
                    assert_eq!(pending_bcp, 0);
                }
                "pre_resolve" => pending_resolve += 1,
                "post_resolve" => {
                    pending_resolve -= 1;
                    assert_eq!(pending_resolve, 0);
                }
                _ => unreachable!(),
            }
        }
        assert_eq!(pending_bcp, 0);
        assert_eq!(pending_resolve, 0);
    }

    #[test]
    fn hooks_observe_without_altering_the_solve() {
        let formula = backtracking_formula();

        let mut silent = Context::from_config(Config::default());
        assert_eq!(silent.solve(&formula), Ok(Report::Satisfiable));
        let silent_trail: Vec<_> = silent.trail.literals().collect();

        let mut observed = Context::from_config(Config::default());
        observed.set_callback_pre_bcp(Box::new(|_| {}));
        observed.set_callback_post_bcp(Box::new(|_| {}));
        observed.set_callback_pre_resolve(Box::new(|_| {}));
        observed.set_callback_post_resolve(Box::new(|_| {}));
        assert_eq!(observed.solve(&formula), Ok(Report::Satisfiable));
        let observed_trail: Vec<_> = observed.trail.literals().collect();

        assert_eq!(silent_trail, observed_trail);
        assert_eq!(silent.assignment(), observed.assignment());
        assert_eq!(
            silent.counters.total_decisions,
            observed.counters.total_decisions
        );
    }

    #[test]
    fn views_track_the_decision_level() {
        let formula = backtracking_formula();
        let mut ctx = Context::from_config(Config::default());

        ctx.set_callback_pre_bcp(Box::new(|view| {
            assert!(view.trail.assignments().all(|a| a.level <= view.level));
        }));

        assert_eq!(ctx.solve(&formula), Ok(Report::Satisfiable));
    }
}
