/*!
Observer hooks associated with a context.

Four optional callback points: before BCP, after BCP, before conflict
resolution, and after conflict resolution.
Each receives a read-only [view](StateView) of the current solver state.

Hooks are pure observers.
Their return value is ignored, the solve behaves identically whether or not
they are registered, and a hook which panics is a caller error outside the
library's failure model.

# Example

```rust
# use std::cell::Cell;
# use std::rc::Rc;
# use ibex_sat::config::Config;
# use ibex_sat::context::Context;
# use ibex_sat::structures::formula::Formula;
let mut formula = Formula::new();
let p = formula.literal("p", true);
formula.add_clause(vec![p]).unwrap();

let mut context = Context::from_config(Config::default());

let observed = Rc::new(Cell::new(0));
let counter = Rc::clone(&observed);
context.set_callback_post_bcp(Box::new(move |view| {
    counter.set(counter.get() + view.trail.len());
}));

context.solve(&formula).unwrap();
assert!(observed.get() > 0);
```
*/

use crate::{db::trail::Trail, db::LevelIndex, graph::ImplicationGraph};

use super::Context;

/// A read-only view of the solver state, handed to observer hooks.
pub struct StateView<'a> {
    /// The trail at the instant of invocation.
    pub trail: &'a Trail,

    /// The implication graph at the instant of invocation, reflecting the
    /// trail exactly.
    pub graph: &'a ImplicationGraph,

    /// The current decision level.
    pub level: LevelIndex,
}

/// An observer hook.
///
/// Mutable, as a hook may accumulate information, though information passed
/// from the solver is non-mutable.
pub type Observer = dyn FnMut(&StateView<'_>);

/// The four optional callback slots.
#[derive(Default)]
pub struct Callbacks {
    pub(crate) pre_bcp: Option<Box<Observer>>,
    pub(crate) post_bcp: Option<Box<Observer>>,
    pub(crate) pre_resolve: Option<Box<Observer>>,
    pub(crate) post_resolve: Option<Box<Observer>>,
}

impl Context {
    /// Registers an observer invoked before each run of BCP.
    pub fn set_callback_pre_bcp(&mut self, callback: Box<Observer>) {
        self.callbacks.pre_bcp = Some(callback);
    }

    /// Registers an observer invoked after each run of BCP.
    pub fn set_callback_post_bcp(&mut self, callback: Box<Observer>) {
        self.callbacks.post_bcp = Some(callback);
    }

    /// Registers an observer invoked before each conflict resolution.
    pub fn set_callback_pre_resolve(&mut self, callback: Box<Observer>) {
        self.callbacks.pre_resolve = Some(callback);
    }

    /// Registers an observer invoked after each conflict resolution.
    pub fn set_callback_post_resolve(&mut self, callback: Box<Observer>) {
        self.callbacks.post_resolve = Some(callback);
    }

    pub(crate) fn observe_pre_bcp(&mut self) {
        if let Some(callback) = self.callbacks.pre_bcp.as_mut() {
            callback(&StateView {
                trail: &self.trail,
                graph: &self.graph,
                level: self.level,
            });
        }
    }

    pub(crate) fn observe_post_bcp(&mut self) {
        if let Some(callback) = self.callbacks.post_bcp.as_mut() {
            callback(&StateView {
                trail: &self.trail,
                graph: &self.graph,
                level: self.level,
            });
        }
    }

    pub(crate) fn observe_pre_resolve(&mut self) {
        if let Some(callback) = self.callbacks.pre_resolve.as_mut() {
            callback(&StateView {
                trail: &self.trail,
                graph: &self.graph,
                level: self.level,
            });
        }
    }

    pub(crate) fn observe_post_resolve(&mut self) {
        if let Some(callback) = self.callbacks.post_resolve.as_mut() {
            callback(&StateView {
                trail: &self.trail,
                graph: &self.graph,
                level: self.level,
            });
        }
    }
}
