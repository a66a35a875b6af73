//! The regular-expression tree and its lazy language enumerator.

#[allow(clippy::module_inception)]
pub mod regex;

pub use regex::{atom, lang, pair, re, star, sym, LangIter, Op, Regex};
