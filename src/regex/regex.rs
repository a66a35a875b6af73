use std::fmt;
use std::ops::{Add, Mul};

use rustc_hash::FxHashSet;

use crate::coerce::{to_atom, to_regex, Value};
use crate::elem::Elem;
use crate::error::{Error, Result};
use crate::finite_set::FiniteSet;
use crate::fst::{Fst, Label, Words};
use crate::sequence::Sequence;
use crate::symbol::Symbol;

/// An immutable regular-expression node.
///
/// Every node eagerly builds its backing automaton at construction time by
/// folding the backend's union/concatenation/closure operations over its
/// children. Repeated combination of large sub-expressions therefore pays
/// the full cost of every intermediate automaton; nothing is shared or
/// re-batched.
#[derive(Debug, Clone)]
pub struct Regex {
    pub op: Op,
    pub fst: Fst,
    pub is_infinite: bool,
    pub is_transducer: bool,
}

#[derive(Debug, Clone)]
pub enum Op {
    Atom(Label),
    Union(Vec<Regex>),
    Concat(Vec<Regex>),
    Star(Box<Regex>),
}

impl Regex {
    /// Wraps one terminal label. A pair label makes a transducer atom.
    pub fn atom(label: Label) -> Regex {
        let fst = Fst::atom(label.clone());
        let is_transducer = matches!(label, Label::Pair(..));
        Regex {
            op: Op::Atom(label),
            fst,
            is_infinite: false,
            is_transducer,
        }
    }

    /// N-ary union; every argument is coerced to a regex first.
    pub fn union<I, T>(args: I) -> Result<Regex>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let args: Vec<Regex> = args.into_iter().map(to_regex).collect::<Result<_>>()?;
        Ok(Regex::union_of(args))
    }

    pub(crate) fn union_of(args: Vec<Regex>) -> Regex {
        // Zero alternatives is the empty language.
        let fst = match args.split_first() {
            None => Fst::new(),
            Some((first, rest)) => rest
                .iter()
                .fold(first.fst.clone(), |acc, x| acc.union(&x.fst)),
        };
        Regex {
            fst,
            is_infinite: args.iter().any(|a| a.is_infinite),
            is_transducer: args.iter().any(|a| a.is_transducer),
            op: Op::Union(args),
        }
    }

    /// N-ary concatenation; every argument is coerced to a regex first.
    pub fn concatenation<I, T>(args: I) -> Result<Regex>
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let args: Vec<Regex> = args.into_iter().map(to_regex).collect::<Result<_>>()?;
        Ok(Regex::concat_of(args))
    }

    pub(crate) fn concat_of(args: Vec<Regex>) -> Regex {
        // Zero factors is the epsilon language.
        let fst = match args.split_first() {
            None => Fst::atom(Label::Sym(Symbol::epsilon())),
            Some((first, rest)) => rest
                .iter()
                .fold(first.fst.clone(), |acc, x| acc.concatenate(&x.fst)),
        };
        Regex {
            fst,
            is_infinite: args.iter().any(|a| a.is_infinite),
            is_transducer: args.iter().any(|a| a.is_transducer),
            op: Op::Concat(args),
        }
    }

    /// Kleene closure; the argument is coerced to a regex first.
    pub fn star(arg: impl Into<Value>) -> Result<Regex> {
        Ok(Regex::star_of(to_regex(arg)?))
    }

    pub(crate) fn star_of(arg: Regex) -> Regex {
        Regex {
            fst: arg.fst.kleene_closure(),
            is_infinite: true,
            is_transducer: arg.is_transducer,
            op: Op::Star(Box::new(arg)),
        }
    }

    /// Canonical bare-text rendering. A union renders its children sorted
    /// lexicographically, so textually identical multisets of alternatives
    /// always render identically regardless of construction order.
    pub fn bare(&self) -> String {
        match &self.op {
            Op::Atom(Label::Sym(s)) => s.bare(),
            Op::Atom(Label::Pair(input, output)) => format!("{}:{}", input.bare(), output.bare()),
            Op::Union(args) => match args.len() {
                0 => "\u{2205}".to_string(),
                1 => args[0].bare(),
                _ => {
                    let mut parts: Vec<String> = args.iter().map(|a| a.bare()).collect();
                    parts.sort();
                    format!("({})", parts.join(" + "))
                }
            },
            Op::Concat(args) => match args.len() {
                0 => "\u{03b5}".to_string(),
                1 => args[0].bare(),
                _ => {
                    let parts: Vec<String> = args.iter().map(|a| a.bare()).collect();
                    format!("({})", parts.join("\u{22c5}"))
                }
            },
            Op::Star(arg) => format!("{}*", arg.bare()),
        }
    }

    /// A fresh, restartable iterator over the node's language. Items are
    /// deduplicated by value within this iteration; concurrent iterations
    /// are independent. If the node is infinite the iteration is unbounded
    /// and the caller must impose its own limit.
    pub fn language_iter(&self) -> LangIter<'_> {
        LangIter {
            words: self.fst.words(),
            seen: FxHashSet::default(),
            transducer: self.is_transducer,
        }
    }

    /// Materializes the full language as a finite set; fails when the
    /// language is infinite.
    pub fn lang(&self) -> Result<FiniteSet> {
        if self.is_infinite {
            return Err(Error::InfiniteLanguage);
        }
        Ok(FiniteSet::from_elems(self.language_iter()))
    }

    /// Renders at most the first `n` enumerated items as `[i] item` lines,
    /// with a trailing `...` line when the enumeration was truncated.
    pub fn preview(&self, n: usize) -> String {
        let mut out = String::new();
        for (i, item) in self.language_iter().enumerate() {
            if i >= n {
                out.push_str("...\n");
                break;
            }
            out.push_str(&format!("[{}] {}\n", i, item));
        }
        out
    }
}

impl fmt::Display for Regex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.bare())
    }
}

impl Add for Regex {
    type Output = Regex;

    fn add(self, other: Regex) -> Regex {
        Regex::union_of(vec![self, other])
    }
}

impl Add<&str> for Regex {
    type Output = Regex;

    fn add(self, other: &str) -> Regex {
        Regex::union_of(vec![self, Regex::atom(Label::Sym(Symbol::from(other)))])
    }
}

impl Mul for Regex {
    type Output = Regex;

    fn mul(self, other: Regex) -> Regex {
        Regex::concat_of(vec![self, other])
    }
}

impl Mul<&str> for Regex {
    type Output = Regex;

    fn mul(self, other: &str) -> Regex {
        Regex::concat_of(vec![self, Regex::atom(Label::Sym(Symbol::from(other)))])
    }
}

/// Lazy, deduplicated enumeration of a regex node's language: accepted
/// strings as sequences, or (input, output) sequence pairs for transducer
/// nodes. Enumeration order follows the backend's weighted word stream.
pub struct LangIter<'a> {
    words: Words<'a>,
    seen: FxHashSet<Elem>,
    transducer: bool,
}

impl Iterator for LangIter<'_> {
    type Item = Elem;

    fn next(&mut self) -> Option<Elem> {
        loop {
            let (_cost, labels) = self.words.next()?;
            let item = if self.transducer {
                let mut inputs = Vec::new();
                let mut outputs = Vec::new();
                for label in &labels {
                    match label {
                        Label::Sym(s) => {
                            if !s.is_epsilon() {
                                inputs.push(s.clone());
                                outputs.push(s.clone());
                            }
                        }
                        Label::Pair(input, output) => {
                            if !input.is_epsilon() {
                                inputs.push(input.clone());
                            }
                            if !output.is_epsilon() {
                                outputs.push(output.clone());
                            }
                        }
                    }
                }
                Elem::Pair(Sequence::new(inputs), Sequence::new(outputs))
            } else {
                Elem::Seq(Sequence::new(
                    labels.iter().map(|l| l.first().clone()).collect(),
                ))
            };
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
    }
}

/// Wraps a value as an atom node; never fails for symbol-like input.
pub fn sym(x: impl Into<Symbol>) -> Regex {
    Regex::atom(Label::Sym(x.into()))
}

/// A transducer atom reading `input` and writing `output`.
pub fn pair(input: impl Into<Symbol>, output: impl Into<Symbol>) -> Regex {
    Regex::atom(Label::Pair(input.into(), output.into()))
}

/// Coerces a value to a regex node.
pub fn re(x: impl Into<Value>) -> Result<Regex> {
    to_regex(x)
}

/// Coerces a value to an atom node.
pub fn atom(x: impl Into<Value>) -> Result<Regex> {
    to_atom(x)
}

/// Kleene closure of a (coerced) value.
pub fn star(x: impl Into<Value>) -> Result<Regex> {
    Regex::star(x)
}

/// Materializes a regex node's full language.
pub fn lang(x: &Regex) -> Result<FiniteSet> {
    x.lang()
}
