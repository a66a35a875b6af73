//! The backend automaton layer: a small weighted finite-state machine with
//! union/concatenation/closure constructions, a lazy weighted word stream,
//! and a direct construction builder.

mod builder;
#[allow(clippy::module_inception)]
mod fst;
mod words;

pub use builder::FsaBuilder;
pub use fst::{Fst, FstState, Label, Transition};
pub use words::Words;
