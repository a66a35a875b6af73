use hashbrown::{HashMap, HashSet};

use crate::symbol::Symbol;

/// A transition label: a single symbol (acceptor) or an input/output symbol
/// pair (transducer).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Label {
    Sym(Symbol),
    Pair(Symbol, Symbol),
}

impl Label {
    pub fn epsilon() -> Self {
        Label::Sym(Symbol::epsilon())
    }

    /// The first (input-side) symbol; transitions are keyed by it.
    pub fn first(&self) -> &Symbol {
        match self {
            Label::Sym(s) => s,
            Label::Pair(input, _) => input,
        }
    }

    /// A label is epsilon when every component is the epsilon symbol.
    pub fn is_epsilon(&self) -> bool {
        match self {
            Label::Sym(s) => s.is_epsilon(),
            Label::Pair(input, output) => input.is_epsilon() && output.is_epsilon(),
        }
    }

    pub fn components(&self) -> Vec<&Symbol> {
        match self {
            Label::Sym(s) => vec![s],
            Label::Pair(input, output) => vec![input, output],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub label: Label,
    pub target: usize,
    pub weight: f64,
}

/// A state of the automaton: a name, an optional final weight, and the
/// outgoing transitions keyed by first label symbol.
#[derive(Debug, Clone)]
pub struct FstState {
    pub name: Symbol,
    pub final_weight: Option<f64>,
    pub transitions: HashMap<Symbol, Vec<Transition>>,
}

impl FstState {
    pub fn new(name: Symbol) -> Self {
        FstState {
            name,
            final_weight: None,
            transitions: HashMap::new(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.final_weight.is_some()
    }
}

/// A weighted finite-state automaton or transducer.
///
/// `Fst::new()` is the empty language: a single non-final state. All
/// combination operations return a new automaton and leave their inputs
/// untouched.
#[derive(Debug, Clone)]
pub struct Fst {
    pub states: Vec<FstState>,
    pub start: usize,
    pub alphabet: HashSet<Symbol>,
}

impl Fst {
    pub fn new() -> Self {
        Fst {
            states: vec![FstState::new(Symbol::Int(0))],
            start: 0,
            alphabet: HashSet::new(),
        }
    }

    /// A two-state automaton accepting exactly the given label.
    pub fn atom(label: Label) -> Self {
        let mut fst = Fst::new();
        let end = fst.add_state(Symbol::Int(1));
        fst.add_transition(0, label, end, 0.0);
        fst.set_final(end, 0.0);
        fst
    }

    pub fn add_state(&mut self, name: Symbol) -> usize {
        let index = self.states.len();
        self.states.push(FstState::new(name));
        index
    }

    /// Adds a transition and registers the label's symbols in the alphabet.
    pub fn add_transition(&mut self, from: usize, label: Label, to: usize, weight: f64) {
        for sym in label.components() {
            self.alphabet.insert(sym.clone());
        }
        let first = label.first().clone();
        self.states[from]
            .transitions
            .entry(first)
            .or_default()
            .push(Transition {
                label,
                target: to,
                weight,
            });
    }

    pub fn has_transition(&self, from: usize, label: &Label, to: usize) -> bool {
        match self.states[from].transitions.get(label.first()) {
            Some(ts) => ts.iter().any(|t| t.target == to && &t.label == label),
            None => false,
        }
    }

    pub fn set_final(&mut self, state: usize, weight: f64) {
        self.states[state].final_weight = Some(weight);
    }

    pub fn final_states(&self) -> Vec<usize> {
        (0..self.states.len())
            .filter(|&i| self.states[i].is_final())
            .collect()
    }

    /// Copies another automaton's states into this one, returning the index
    /// offset at which they were placed. The alphabet is merged.
    fn import(&mut self, other: &Fst) -> usize {
        let offset = self.states.len();
        for state in &other.states {
            let mut copy = FstState::new(state.name.clone());
            copy.final_weight = state.final_weight;
            for (first, ts) in &state.transitions {
                copy.transitions.insert(
                    first.clone(),
                    ts.iter()
                        .map(|t| Transition {
                            label: t.label.clone(),
                            target: t.target + offset,
                            weight: t.weight,
                        })
                        .collect(),
                );
            }
            self.states.push(copy);
        }
        self.alphabet.extend(other.alphabet.iter().cloned());
        offset
    }

    /// A new automaton recognizing the union of the two languages: a fresh
    /// start state with epsilon transitions into both operands.
    pub fn union(&self, other: &Fst) -> Fst {
        let mut out = Fst::new();
        let a = out.import(self);
        let b = out.import(other);
        out.add_transition(0, Label::epsilon(), self.start + a, 0.0);
        out.add_transition(0, Label::epsilon(), other.start + b, 0.0);
        out
    }

    /// A new automaton recognizing the concatenation of the two languages:
    /// the left operand's final states lose their final weight and gain an
    /// epsilon transition into the right operand's start state.
    pub fn concatenate(&self, other: &Fst) -> Fst {
        let mut out = self.clone();
        let left_finals = out.final_states();
        let b = out.import(other);
        for f in left_finals {
            out.states[f].final_weight = None;
            out.add_transition(f, Label::epsilon(), other.start + b, 0.0);
        }
        out
    }

    /// A new automaton recognizing the Kleene closure of the language: a
    /// fresh final start state with an epsilon transition into the operand,
    /// and epsilon transitions from the operand's final states back to it.
    pub fn kleene_closure(&self) -> Fst {
        let mut out = Fst::new();
        out.set_final(0, 0.0);
        let a = out.import(self);
        out.add_transition(0, Label::epsilon(), self.start + a, 0.0);
        for f in self.final_states() {
            out.add_transition(f + a, Label::epsilon(), 0, 0.0);
        }
        out
    }

    /// All states reachable from `states` through transitions whose
    /// input-side symbol is epsilon.
    fn epsilon_closure(&self, states: HashSet<usize>) -> HashSet<usize> {
        let mut closure = states.clone();
        let mut stack: Vec<usize> = Vec::from_iter(states);
        let eps = Symbol::epsilon();

        while let Some(state) = stack.pop() {
            if let Some(ts) = self.states[state].transitions.get(&eps) {
                for t in ts {
                    if closure.insert(t.target) {
                        stack.push(t.target);
                    }
                }
            }
        }

        closure
    }

    /// Whether the automaton accepts the input, reading the input side of
    /// each label.
    pub fn accepts(&self, input: &[Symbol]) -> bool {
        let mut current = self.epsilon_closure(HashSet::from([self.start]));
        for sym in input {
            let mut next = HashSet::new();
            for &state in &current {
                if let Some(ts) = self.states[state].transitions.get(sym) {
                    for t in ts {
                        next.insert(t.target);
                    }
                }
            }
            current = self.epsilon_closure(next);
            if current.is_empty() {
                return false;
            }
        }
        current.iter().any(|&s| self.states[s].is_final())
    }
}

impl Default for Fst {
    fn default() -> Self {
        Fst::new()
    }
}
