/*!
Procedures involved in a solve.

Each procedure is implemented on the [context](crate::context::Context), with
one module per concern:

- [bcp] for boolean constraint propagation.
- [decision] for choosing (or receiving) a decision.
- [backtrack] for chronological conflict resolution.
- [solve] for the driver loop tying the above together.
- [brute] for an exhaustive oracle, used to check small instances.
*/

pub mod backtrack;
pub mod bcp;
pub mod brute;
pub mod decision;
pub mod solve;
