use std::fmt;

use crate::sequence::Sequence;
use crate::symbol::Symbol;

/// An element of a finite set or of an enumerated language: a bare symbol,
/// a sequence, or a transduction item pairing an input sequence with an
/// output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Elem {
    Sym(Symbol),
    Seq(Sequence),
    Pair(Sequence, Sequence),
}

impl fmt::Display for Elem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Elem::Sym(s) => write!(f, "{}", s),
            Elem::Seq(s) => write!(f, "{}", s),
            Elem::Pair(input, output) => write!(f, "({}, {})", input, output),
        }
    }
}

impl From<Symbol> for Elem {
    fn from(s: Symbol) -> Self {
        Elem::Sym(s)
    }
}

impl From<Sequence> for Elem {
    fn from(s: Sequence) -> Self {
        Elem::Seq(s)
    }
}

impl From<&str> for Elem {
    fn from(s: &str) -> Self {
        Elem::Sym(Symbol::from(s))
    }
}
