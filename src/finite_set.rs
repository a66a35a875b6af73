use std::fmt;
use std::ops::{Add, BitAnd, BitOr, Sub};

use hashbrown::hash_set;
use hashbrown::HashSet;

use crate::coerce::{to_sequence, to_set, Value};
use crate::elem::Elem;
use crate::error::{Error, Result};
use crate::symbol::Symbol;

/// An immutable finite unordered collection with set algebra and a
/// cross-product operator (the concatenation of two finite languages).
///
/// Binary operations coerce their operand first and fail with a coercion
/// error when no rule applies. The empty set is the empty language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiniteSet {
    pub data: HashSet<Elem>,
}

impl FiniteSet {
    pub fn new() -> Self {
        FiniteSet {
            data: HashSet::new(),
        }
    }

    pub fn from_elems<I, T>(elems: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Elem>,
    {
        FiniteSet {
            data: elems.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, elem: &Elem) -> bool {
        self.data.contains(elem)
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Elem> {
        self.data.iter()
    }

    /// Set equality after coercing the operand; `false` when the operand
    /// has no coercion path to a set.
    pub fn equals(&self, other: impl Into<Value>) -> bool {
        to_set(other).map(|s| s.data == self.data).unwrap_or(false)
    }

    pub fn is_subset(&self, other: impl Into<Value>) -> Result<bool> {
        let other = to_set(other)?;
        Ok(self.data.is_subset(&other.data))
    }

    pub fn union(&self, other: impl Into<Value>) -> Result<FiniteSet> {
        let other = to_set(other)?;
        Ok(FiniteSet {
            data: self.data.union(&other.data).cloned().collect(),
        })
    }

    pub fn intersection(&self, other: impl Into<Value>) -> Result<FiniteSet> {
        let other = to_set(other)?;
        Ok(FiniteSet {
            data: self.data.intersection(&other.data).cloned().collect(),
        })
    }

    pub fn difference(&self, other: impl Into<Value>) -> Result<FiniteSet> {
        let other = to_set(other)?;
        Ok(FiniteSet {
            data: self.data.difference(&other.data).cloned().collect(),
        })
    }

    /// Language concatenation: every element of each operand is coerced to
    /// a sequence and all pairwise concatenations are collected. The
    /// operand may be a set, a sequence, or anything sequence-coercible.
    pub fn cross(&self, other: impl Into<Value>) -> Result<FiniteSet> {
        match other.into() {
            Value::Set(other) => {
                let mut out = HashSet::new();
                for x in self.iter() {
                    let x = to_sequence(x.clone())?;
                    for y in other.iter() {
                        let y = to_sequence(y.clone())?;
                        out.insert(Elem::Seq(x.concat(&y)));
                    }
                }
                Ok(FiniteSet { data: out })
            }
            Value::Seq(suffix) => {
                let mut out = HashSet::new();
                for x in self.iter() {
                    let x = to_sequence(x.clone())?;
                    out.insert(Elem::Seq(x.concat(&suffix)));
                }
                Ok(FiniteSet { data: out })
            }
            other => {
                let suffix = to_sequence(other)?;
                self.cross(Value::Seq(suffix))
            }
        }
    }
}

impl BitOr for &FiniteSet {
    type Output = FiniteSet;

    fn bitor(self, other: &FiniteSet) -> FiniteSet {
        FiniteSet {
            data: self.data.union(&other.data).cloned().collect(),
        }
    }
}

impl Add for &FiniteSet {
    type Output = FiniteSet;

    fn add(self, other: &FiniteSet) -> FiniteSet {
        self | other
    }
}

impl BitAnd for &FiniteSet {
    type Output = FiniteSet;

    fn bitand(self, other: &FiniteSet) -> FiniteSet {
        FiniteSet {
            data: self.data.intersection(&other.data).cloned().collect(),
        }
    }
}

impl Sub for &FiniteSet {
    type Output = FiniteSet;

    fn sub(self, other: &FiniteSet) -> FiniteSet {
        FiniteSet {
            data: self.data.difference(&other.data).cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FiniteSet {
    type Item = &'a Elem;
    type IntoIter = hash_set::Iter<'a, Elem>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for FiniteSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.is_empty() {
            write!(f, "\u{2205}")
        } else {
            // Canonical form: sorted by rendering, independent of insertion
            // order.
            let mut parts: Vec<String> = self.data.iter().map(|e| e.to_string()).collect();
            parts.sort();
            write!(f, "{{{}}}", parts.join(", "))
        }
    }
}

/// The empty language.
pub fn empty_set() -> FiniteSet {
    FiniteSet::new()
}

fn collect_texts(value: Value, what: &str) -> Result<Vec<String>> {
    let text_of = |elem: &Elem| -> Result<String> {
        match elem {
            Elem::Sym(Symbol::Text(s)) => Ok(s.clone()),
            other => Err(Error::Validation(format!(
                "{} elements must be text, got {}",
                what, other
            ))),
        }
    };
    match value {
        Value::Sym(Symbol::Text(s)) => Ok(s.split_whitespace().map(str::to_string).collect()),
        Value::Seq(seq) => seq
            .iter()
            .map(|x| text_of(&Elem::Sym(x.clone())))
            .collect(),
        Value::Set(set) => set.iter().map(text_of).collect(),
        other => Err(Error::Validation(format!(
            "expecting {}, got {}",
            what, other
        ))),
    }
}

/// Builds a vocabulary: a finite set of words from a whitespace-delimited
/// string or a collection of text symbols. No element may contain
/// whitespace.
pub fn vocab(words: impl Into<Value>) -> Result<FiniteSet> {
    let words = collect_texts(words.into(), "vocabulary")?;
    for word in &words {
        if word.chars().any(char::is_whitespace) {
            return Err(Error::Validation(format!(
                "vocabulary elements cannot contain spaces: {:?}",
                word
            )));
        }
    }
    Ok(FiniteSet::from_elems(
        words.into_iter().map(|w| Elem::Sym(Symbol::Text(w))),
    ))
}

/// Builds an alphabet: a finite set of single-character symbols from a
/// string or a collection of text symbols.
pub fn alphabet(letters: impl Into<Value>) -> Result<FiniteSet> {
    let letters = match letters.into() {
        // A bare string is its characters.
        Value::Sym(Symbol::Text(s)) => s.chars().map(String::from).collect(),
        other => collect_texts(other, "alphabet")?,
    };
    for letter in &letters {
        if letter.chars().count() != 1 {
            return Err(Error::Validation(format!(
                "alphabet elements must be single letters: {:?}",
                letter
            )));
        }
    }
    Ok(FiniteSet::from_elems(
        letters.into_iter().map(|c| Elem::Sym(Symbol::Text(c))),
    ))
}
