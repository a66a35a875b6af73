use super::fst::{Fst, Label};
use crate::symbol::Symbol;

/// Direct, low-level construction of an automaton, bypassing the regex
/// tree: declare transitions and final states one call at a time, then take
/// ownership of the result with [`FsaBuilder::finish`].
///
/// Each builder value owns one automaton under construction, so independent
/// builds do not interfere. States are looked up by name with a linear scan
/// over existing states, which is fine at the builder's interactive scale.
/// The empty-text symbol is the epsilon label.
pub struct FsaBuilder {
    fsa: Option<Fst>,
}

impl FsaBuilder {
    pub fn new() -> Self {
        FsaBuilder { fsa: None }
    }

    fn require_fsa(&mut self) -> &mut Fst {
        self.fsa.get_or_insert_with(Fst::new)
    }

    /// Finds the state with the given name, creating it on first mention.
    fn require_state(fst: &mut Fst, name: &Symbol) -> usize {
        match fst.states.iter().position(|s| &s.name == name) {
            Some(index) => index,
            None => fst.add_state(name.clone()),
        }
    }

    fn add_edge(&mut self, from: Symbol, label: Label, to: Symbol) {
        let fst = self.require_fsa();
        let q1 = Self::require_state(fst, &from);
        let q2 = Self::require_state(fst, &to);
        // Re-declaring an identical transition is a no-op.
        if !fst.has_transition(q1, &label, q2) {
            fst.add_transition(q1, label, q2, 0.0);
        }
    }

    /// Adds a zero-weight acceptor transition `from --label--> to`,
    /// creating both states and the automaton itself as needed.
    pub fn edge(&mut self, from: impl Into<Symbol>, label: impl Into<Symbol>, to: impl Into<Symbol>) {
        self.add_edge(from.into(), Label::Sym(label.into()), to.into());
    }

    /// Adds a zero-weight transducer transition labeled by an input/output
    /// symbol pair.
    pub fn edge_pair(
        &mut self,
        from: impl Into<Symbol>,
        input: impl Into<Symbol>,
        output: impl Into<Symbol>,
        to: impl Into<Symbol>,
    ) {
        self.add_edge(
            from.into(),
            Label::Pair(input.into(), output.into()),
            to.into(),
        );
    }

    /// Marks the named state final with zero weight; idempotent.
    pub fn mark_final(&mut self, state: impl Into<Symbol>) {
        let fst = self.require_fsa();
        let q = Self::require_state(fst, &state.into());
        if !fst.states[q].is_final() {
            fst.set_final(q, 0.0);
        }
    }

    /// Returns the automaton built so far and resets the builder. If
    /// nothing was ever declared the result is a fresh empty-language
    /// automaton.
    pub fn finish(&mut self) -> Fst {
        self.fsa.take().unwrap_or_else(Fst::new)
    }

    /// Discards any in-progress construction without producing a result.
    pub fn reset(&mut self) {
        self.fsa = None;
    }
}

impl Default for FsaBuilder {
    fn default() -> Self {
        FsaBuilder::new()
    }
}
