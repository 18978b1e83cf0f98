//! Literals: a signed occurrence of an [Atom].

use std::fmt;

use super::atom::Atom;

/// A literal: an atom paired with the polarity it occurs with.
///
/// `CLiteral::new(v, true)` is the literal usually written `v`; `CLiteral::new(v, false)`
/// is the literal usually written `¬v`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CLiteral {
    atom: Atom,
    polarity: bool,
}

impl CLiteral {
    /// Builds a literal from an atom and a polarity.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        assert!(atom != 0, "atom 0 is reserved");
        CLiteral { atom, polarity }
    }

    /// Builds a literal from a nonzero signed DIMACS-style integer.
    pub fn from_dimacs(value: isize) -> Self {
        assert!(value != 0, "literal 0 is a clause terminator, not a literal");
        CLiteral::new(value.unsigned_abs() as Atom, value.is_positive())
    }

    pub fn atom(&self) -> Atom {
        self.atom
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The negation of this literal.
    pub fn negate(&self) -> Self {
        CLiteral::new(self.atom, !self.polarity)
    }

    /// This literal rendered as a signed DIMACS integer.
    pub fn as_dimacs(&self) -> isize {
        match self.polarity {
            true => self.atom as isize,
            false => -(self.atom as isize),
        }
    }

    /// A dense index usable to key a `Vec` by literal rather than by atom.
    ///
    /// Atoms are 1-indexed, so `(atom - 1) * 2 + polarity_bit` is used rather
    /// than `atom * 2 + polarity_bit`, to avoid wasting every even slot.
    pub fn index(&self) -> usize {
        let base = (self.atom as usize - 1) * 2;
        match self.polarity {
            true => base,
            false => base + 1,
        }
    }
}

impl fmt::Display for CLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_dimacs())
    }
}

/// A clause: a disjunction of literals, represented without internal ordering semantics.
pub type CClause = Vec<CLiteral>;
