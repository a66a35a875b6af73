use std::fmt;
use std::ops::Mul;
use std::slice;

use crate::coerce::{to_sequence, Value};
use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// An immutable finite ordered tuple of symbols.
///
/// Sequences form a monoid under concatenation with [`epsilon`] as the
/// identity. Equality and hashing are structural; the total order is
/// lexicographic on the elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence {
    pub elements: Vec<Symbol>,
}

impl Sequence {
    pub fn new(elements: Vec<Symbol>) -> Self {
        Sequence { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Bounds-checked element access.
    pub fn get(&self, i: usize) -> Result<&Symbol> {
        self.elements.get(i).ok_or_else(|| {
            Error::Validation(format!(
                "index {} out of range for a sequence of length {}",
                i,
                self.elements.len()
            ))
        })
    }

    pub fn iter(&self) -> slice::Iter<'_, Symbol> {
        self.elements.iter()
    }

    pub fn concat(&self, other: &Sequence) -> Sequence {
        let mut elements = self.elements.clone();
        elements.extend(other.elements.iter().cloned());
        Sequence { elements }
    }

    /// Concatenation with any sequence-coercible operand.
    pub fn concat_with(&self, other: impl Into<Value>) -> Result<Sequence> {
        Ok(self.concat(&to_sequence(other)?))
    }

    /// Repetition: `n`-fold self-concatenation. Power zero is [`epsilon`].
    pub fn pow(&self, n: usize) -> Sequence {
        let mut elements = Vec::with_capacity(self.elements.len() * n);
        for _ in 0..n {
            elements.extend(self.elements.iter().cloned());
        }
        Sequence { elements }
    }
}

impl Mul for Sequence {
    type Output = Sequence;

    fn mul(self, other: Sequence) -> Sequence {
        self.concat(&other)
    }
}

impl Mul for &Sequence {
    type Output = Sequence;

    fn mul(self, other: &Sequence) -> Sequence {
        self.concat(other)
    }
}

impl Mul<&str> for Sequence {
    type Output = Sequence;

    fn mul(self, other: &str) -> Sequence {
        let mut elements = self.elements;
        elements.push(Symbol::from(other));
        Sequence { elements }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Symbol;
    type IntoIter = slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.elements.is_empty() {
            write!(f, "\u{03b5}")
        } else {
            let parts: Vec<String> = self.elements.iter().map(|x| x.to_string()).collect();
            write!(f, "<{}>", parts.join(", "))
        }
    }
}

/// The empty sequence.
pub fn epsilon() -> Sequence {
    Sequence::new(Vec::new())
}

/// Builds a sequence from any symbol-like elements.
pub fn seq<I, T>(elements: I) -> Sequence
where
    I: IntoIterator<Item = T>,
    T: Into<Symbol>,
{
    Sequence::new(elements.into_iter().map(Into::into).collect())
}

/// Splits a string into a sequence with one element per character.
pub fn letters(s: &str) -> Sequence {
    Sequence::new(s.chars().map(Symbol::from).collect())
}

/// Splits a whitespace-delimited string into a sequence with one element
/// per token.
pub fn words(s: &str) -> Sequence {
    Sequence::new(s.split_whitespace().map(Symbol::from).collect())
}
