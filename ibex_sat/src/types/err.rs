//! Error types used in the library.
//!
//! - Some of these are external, and are reported to the caller before any
//!   solving begins (e.g. malformed formulas) or abort a solve in progress
//!   (e.g. an invalid decision from an external decision source).
//! - Some of these are internally expected and are used to control the flow
//!   of a solve (e.g. a [BCPError::Conflict] is the normal way a conflict
//!   surfaces, not a defect).
//! - Some of these signal a state the internal state machine defines as
//!   unreachable, and always indicate a defect in the library.
//!
//! Names of the error enums overlap with corresponding modules, so
//! `types::err::{self}` is often used to prefix the types with `err::`.

use crate::structures::{atom::Atom, clause::ClauseIndex};

/// The top-level error type, wrapping the specific errors below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Formula(FormulaError),
    Decision(DecisionError),
    Invariant(InvariantError),
    Parse(ParseError),
}

/// Construction-time rejection of a malformed formula.
///
/// Never surfaces mid-search: formulas are validated clause by clause as they
/// are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormulaError {
    /// The empty clause, unsatisfiable on every valuation.
    EmptyClause,

    /// A clause containing complementary literals.
    Tautology,

    /// A clause over an atom the formula has no name for.
    UnregisteredAtom(Atom),
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// An invalid response from an external decision source.
///
/// Propagated immediately as a solve-aborting error, the solve does not
/// silently retry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecisionError {
    /// The manual heuristic was configured without a decision source.
    NoSource,

    /// The source named an atom the formula does not mention.
    UnknownAtom(String),

    /// The source named an atom which already has a value.
    AlreadyValued(String),
}

impl From<DecisionError> for ErrorKind {
    fn from(e: DecisionError) -> Self {
        ErrorKind::Decision(e)
    }
}

/// A state the solve state machine defines as unreachable.
///
/// Always a defect in the library, never swallowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantError {
    /// Every atom is valued, some clause is unsatisfied, and BCP did not flag
    /// a conflict.
    FullValuationUnsatisfied,

    /// No heuristic found a decision candidate, though some atom is unvalued
    /// and some clause is unsatisfied.
    NoDecisionCandidate,

    /// An antecedent literal has no node in the implication graph.
    UnrecordedAntecedent(Atom),

    /// An atom was assigned while already on the trail.
    RepeatAssignment(Atom),
}

impl From<InvariantError> for ErrorKind {
    fn from(e: InvariantError) -> Self {
        ErrorKind::Invariant(e)
    }
}

/// Noted outcomes of boolean constraint propagation.
///
/// A conflict is expected from time to time, and recovering from one is the
/// core algorithm's normal control flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BCPError {
    /// The indexed clause became empty on the current valuation.
    Conflict(ClauseIndex),

    /// An invariant failed while recording a propagation.
    Invariant(InvariantError),
}

impl From<InvariantError> for BCPError {
    fn from(e: InvariantError) -> Self {
        BCPError::Invariant(e)
    }
}

/// Errors during DIMACS parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Some issue with the problem specification line.
    ProblemSpecification(usize),

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A problem specification line after the first clause.
    MisplacedProblem(usize),

    /// An unreadable token at a specific line.
    Token(usize, String),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Formula(e) => write!(f, "malformed formula: {e:?}"),
            ErrorKind::Decision(e) => write!(f, "invalid external decision: {e:?}"),
            ErrorKind::Invariant(e) => write!(f, "internal invariant violation: {e:?}"),
            ErrorKind::Parse(e) => write!(f, "parse error: {e:?}"),
        }
    }
}

impl std::error::Error for ErrorKind {}
