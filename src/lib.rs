//! A symbolic algebra for finite languages and their finite-state
//! realizations.
//!
//! The crate provides:
//! - sequences and finite sets with a language-concatenation algebra,
//! - an immutable regular-expression tree (atom, union, concatenation,
//!   Kleene closure) whose nodes eagerly build a backing automaton and
//!   enumerate their language lazily and without duplicates,
//! - a low-level automaton builder with direct edge/final-state
//!   construction primitives,
//! - a coercion dispatcher that lets heterogeneous literals be treated
//!   uniformly as sequences, sets, or regular expressions.

#[macro_use]
extern crate lazy_static;

pub mod coerce;
pub mod elem;
pub mod error;
pub mod finite_set;
pub mod fst;
pub mod regex;
pub mod sequence;
pub mod symbol;
