use std::fmt;

use hashbrown::HashMap;

use crate::elem::Elem;
use crate::error::{Error, Result};
use crate::finite_set::FiniteSet;
use crate::fst::Label;
use crate::regex::regex::{Op, Regex};
use crate::sequence::Sequence;
use crate::symbol::Symbol;

/// A value of the algebra's closed universe, as seen by the coercion
/// dispatcher. Heterogeneous literals enter through the `From` impls and
/// are normalized by [`coerce`].
#[derive(Debug, Clone)]
pub enum Value {
    Sym(Symbol),
    Pair(Box<Elem>, Box<Elem>),
    Seq(Sequence),
    Set(FiniteSet),
    Re(Regex),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Sym,
    Pair,
    Seq,
    Set,
    Re,
}

/// A coercion target kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Sequence,
    Set,
    Atom,
    Regex,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Sym(_) => ValueKind::Sym,
            Value::Pair(..) => ValueKind::Pair,
            Value::Seq(_) => ValueKind::Seq,
            Value::Set(_) => ValueKind::Set,
            Value::Re(_) => ValueKind::Re,
        }
    }

    /// Whether the value already has the target kind. An atom is a regex
    /// node, so it satisfies both `Kind::Atom` and `Kind::Regex`.
    pub fn has_kind(&self, kind: Kind) -> bool {
        match kind {
            Kind::Sequence => matches!(self, Value::Seq(_)),
            Kind::Set => matches!(self, Value::Set(_)),
            Kind::Regex => matches!(self, Value::Re(_)),
            Kind::Atom => matches!(self, Value::Re(r) if matches!(r.op, Op::Atom(_))),
        }
    }
}

impl Kind {
    pub fn name(&self) -> &'static str {
        match self {
            Kind::Sequence => "sequence",
            Kind::Set => "finite set",
            Kind::Atom => "atom",
            Kind::Regex => "regex",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Sym(s) => write!(f, "{}", s),
            Value::Pair(a, b) => write!(f, "({}, {})", a, b),
            Value::Seq(s) => write!(f, "{}", s),
            Value::Set(s) => write!(f, "{}", s),
            Value::Re(r) => write!(f, "{}", r),
        }
    }
}

/// One conversion rule: applicable to the listed source kinds, and allowed
/// to decline by returning `None`, in which case the walk continues.
struct Rule {
    sources: &'static [ValueKind],
    convert: fn(&Value) -> Option<Value>,
}

lazy_static! {
    static ref COERCIONS: HashMap<Kind, Vec<Rule>> = {
        let mut table = HashMap::new();
        table.insert(
            Kind::Sequence,
            vec![Rule {
                sources: &[ValueKind::Sym],
                convert: sym_to_singleton_seq,
            }],
        );
        table.insert(
            Kind::Set,
            vec![Rule {
                sources: &[ValueKind::Seq],
                convert: seq_to_set,
            }],
        );
        table.insert(
            Kind::Atom,
            vec![Rule {
                sources: &[ValueKind::Sym, ValueKind::Pair],
                convert: value_to_atom,
            }],
        );
        table.insert(
            Kind::Regex,
            vec![
                Rule {
                    sources: &[ValueKind::Sym],
                    convert: text_to_atom,
                },
                Rule {
                    sources: &[ValueKind::Seq],
                    convert: seq_to_concatenation,
                },
                Rule {
                    sources: &[ValueKind::Set],
                    convert: set_to_union,
                },
            ],
        );
        table
    };
}

/// Converts a value to the target kind, or fails with a coercion error when
/// no registered rule applies. A value that already has the target kind is
/// returned unchanged; otherwise the ordered rule list for the kind is
/// walked and the first applicable, non-declining rule wins.
pub fn coerce(value: Value, kind: Kind) -> Result<Value> {
    if value.has_kind(kind) {
        return Ok(value);
    }
    for rule in &COERCIONS[&kind] {
        if rule.sources.contains(&value.kind()) {
            if let Some(converted) = (rule.convert)(&value) {
                return Ok(converted);
            }
        }
    }
    Err(Error::Coercion {
        value: value.to_string(),
        target: kind.name(),
    })
}

fn sym_to_singleton_seq(value: &Value) -> Option<Value> {
    match value {
        Value::Sym(s) => Some(Value::Seq(Sequence::new(vec![s.clone()]))),
        _ => None,
    }
}

fn seq_to_set(value: &Value) -> Option<Value> {
    match value {
        Value::Seq(s) => Some(Value::Set(FiniteSet::from_elems(
            s.iter().map(|x| Elem::Sym(x.clone())),
        ))),
        _ => None,
    }
}

fn value_to_atom(value: &Value) -> Option<Value> {
    match value {
        Value::Sym(s) => Some(Value::Re(Regex::atom(Label::Sym(s.clone())))),
        Value::Pair(a, b) => match (a.as_ref(), b.as_ref()) {
            (Elem::Sym(input), Elem::Sym(output)) => Some(Value::Re(Regex::atom(Label::Pair(
                input.clone(),
                output.clone(),
            )))),
            _ => None,
        },
        _ => None,
    }
}

// Only text symbols become atoms implicitly; numeric atoms must be built
// explicitly with `sym`.
fn text_to_atom(value: &Value) -> Option<Value> {
    match value {
        Value::Sym(s @ Symbol::Text(_)) => Some(Value::Re(Regex::atom(Label::Sym(s.clone())))),
        _ => None,
    }
}

fn symbol_to_regex(s: &Symbol) -> Option<Regex> {
    match s {
        Symbol::Text(_) => Some(Regex::atom(Label::Sym(s.clone()))),
        _ => None,
    }
}

fn seq_to_concatenation(value: &Value) -> Option<Value> {
    match value {
        Value::Seq(s) => {
            let parts: Option<Vec<Regex>> = s.iter().map(symbol_to_regex).collect();
            Some(Value::Re(Regex::concat_of(parts?)))
        }
        _ => None,
    }
}

fn elem_to_sequence(elem: &Elem) -> Option<Sequence> {
    match elem {
        Elem::Sym(s) => Some(Sequence::new(vec![s.clone()])),
        Elem::Seq(s) => Some(s.clone()),
        Elem::Pair(..) => None,
    }
}

fn set_to_union(value: &Value) -> Option<Value> {
    match value {
        Value::Set(set) => {
            let mut parts = Vec::with_capacity(set.len());
            for elem in set.iter() {
                let s = elem_to_sequence(elem)?;
                let atoms: Option<Vec<Regex>> = s.iter().map(symbol_to_regex).collect();
                parts.push(Regex::concat_of(atoms?));
            }
            Some(Value::Re(Regex::union_of(parts)))
        }
        _ => None,
    }
}

/// Coerces to a [`Sequence`].
pub fn to_sequence(value: impl Into<Value>) -> Result<Sequence> {
    match coerce(value.into(), Kind::Sequence)? {
        Value::Seq(s) => Ok(s),
        _ => unreachable!("sequence coercion produced a non-sequence"),
    }
}

/// Coerces to a [`FiniteSet`].
pub fn to_set(value: impl Into<Value>) -> Result<FiniteSet> {
    match coerce(value.into(), Kind::Set)? {
        Value::Set(s) => Ok(s),
        _ => unreachable!("set coercion produced a non-set"),
    }
}

/// Coerces to an atom node.
pub fn to_atom(value: impl Into<Value>) -> Result<Regex> {
    match coerce(value.into(), Kind::Atom)? {
        Value::Re(r) => Ok(r),
        _ => unreachable!("atom coercion produced a non-regex"),
    }
}

/// Coerces to a regex node.
pub fn to_regex(value: impl Into<Value>) -> Result<Regex> {
    match coerce(value.into(), Kind::Regex)? {
        Value::Re(r) => Ok(r),
        _ => unreachable!("regex coercion produced a non-regex"),
    }
}

impl From<Symbol> for Value {
    fn from(s: Symbol) -> Self {
        Value::Sym(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Sym(Symbol::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Sym(Symbol::from(s))
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Sym(Symbol::from(c))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Sym(Symbol::from(i))
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Sym(Symbol::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Sym(Symbol::from(x))
    }
}

impl From<(&str, &str)> for Value {
    fn from((input, output): (&str, &str)) -> Self {
        Value::Pair(
            Box::new(Elem::Sym(Symbol::from(input))),
            Box::new(Elem::Sym(Symbol::from(output))),
        )
    }
}

impl From<Sequence> for Value {
    fn from(s: Sequence) -> Self {
        Value::Seq(s)
    }
}

impl<T: Into<Symbol>> From<Vec<T>> for Value {
    fn from(elements: Vec<T>) -> Self {
        Value::Seq(Sequence::new(
            elements.into_iter().map(Into::into).collect(),
        ))
    }
}

impl From<FiniteSet> for Value {
    fn from(s: FiniteSet) -> Self {
        Value::Set(s)
    }
}

impl From<Regex> for Value {
    fn from(r: Regex) -> Self {
        Value::Re(r)
    }
}

impl From<Elem> for Value {
    fn from(e: Elem) -> Self {
        match e {
            Elem::Sym(s) => Value::Sym(s),
            Elem::Seq(s) => Value::Seq(s),
            Elem::Pair(input, output) => Value::Pair(
                Box::new(Elem::Seq(input)),
                Box::new(Elem::Seq(output)),
            ),
        }
    }
}
