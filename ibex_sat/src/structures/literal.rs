//! Literals are atoms paired with a (boolean) polarity.
//!
//! A literal with polarity `true` is satisfied when its atom is assigned true,
//! and a literal with polarity `false` is satisfied when its atom is assigned
//! false.
//! Two literals are complementary when they share an atom and differ in
//! polarity.
//!
//! ```rust
//! # use ibex_sat::structures::literal::Literal;
//! let literal = Literal::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), Literal::new(79, false));
//! ```
//!
//! Literals are ordered by atom and then polarity, with false (strictly) less
//! than true, and are hashable to allow use as the indices of maps.

use crate::structures::atom::Atom;

/// An atom paired with a polarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// The atom of the literal.
    atom: Atom,

    /// The polarity of the literal.
    polarity: bool,
}

impl Literal {
    /// A fresh literal, specified by pairing an atom with a polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Literal { atom, polarity }
    }

    /// The atom of the literal.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of the literal.
    pub fn negate(&self) -> Self {
        Literal {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// True when `other` has the same atom and the opposite polarity.
    pub fn complements(&self, other: &Literal) -> bool {
        self.atom == other.atom && self.polarity != other.polarity
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

impl std::ops::Neg for Literal {
    type Output = Literal;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
