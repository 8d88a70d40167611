//! An exhaustive oracle over small formulas.
//!
//! Every total valuation is enumerated, so the verdict is trustworthy without
//! trusting any search machinery.
//! Used to cross-check the solver on randomly generated instances.

use crate::{reports::Report, structures::formula::Formula};

/// The largest atom count the oracle will enumerate.
pub const BRUTE_FORCE_ATOM_MAX: usize = 24;

/// The verdict of exhaustive enumeration, or [None] when the formula has too
/// many atoms to enumerate.
pub fn brute_force_verdict(formula: &Formula) -> Option<Report> {
    let count = formula.atom_count();
    if count > BRUTE_FORCE_ATOM_MAX {
        return None;
    }

    let mut valuation: Vec<Option<bool>> = vec![None; count];
    for mask in 0_u64..(1_u64 << count) {
        for (atom, value) in valuation.iter_mut().enumerate() {
            *value = Some(mask & (1 << atom) != 0);
        }
        if formula.satisfied_on(&valuation) {
            return Some(Report::Satisfiable);
        }
    }

    Some(Report::Unsatisfiable)
}
