use std::cmp::{Ordering, Reverse};

use hashbrown::HashSet;
use priority_queue::PriorityQueue;

use super::fst::{Fst, Label};

/// Accumulated path cost; ordered by cost, with the number of emitted
/// labels as tie-break so equally cheap shorter words come out first.
#[derive(Debug, Clone, Copy)]
struct Weight {
    cost: f64,
    len: usize,
}

impl PartialEq for Weight {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Weight {}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then(self.len.cmp(&other.len))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Path {
    state: usize,
    labels: Vec<Label>,
}

/// Lazy stream of `(weight, label path)` items for every accepted string or
/// transduction, in non-decreasing weight order.
///
/// Best-first search over paths: the frontier is a priority queue keyed by
/// accumulated cost, and a path that has already been expanded is never
/// expanded again, so epsilon cycles cannot keep the stream alive. Wholly-
/// epsilon labels do not appear in yielded paths. The stream terminates
/// only if the language is finite; for an infinite language the caller is
/// responsible for imposing a bound.
pub struct Words<'a> {
    fst: &'a Fst,
    frontier: PriorityQueue<Path, Reverse<Weight>>,
    expanded: HashSet<Path>,
}

impl Fst {
    pub fn words(&self) -> Words<'_> {
        let mut frontier = PriorityQueue::new();
        frontier.push(
            Path {
                state: self.start,
                labels: Vec::new(),
            },
            Reverse(Weight { cost: 0.0, len: 0 }),
        );
        Words {
            fst: self,
            frontier,
            expanded: HashSet::new(),
        }
    }
}

impl Iterator for Words<'_> {
    type Item = (f64, Vec<Label>);

    fn next(&mut self) -> Option<Self::Item> {
        let fst = self.fst;
        while let Some((path, Reverse(weight))) = self.frontier.pop() {
            self.expanded.insert(path.clone());
            let state = &fst.states[path.state];
            for ts in state.transitions.values() {
                for t in ts {
                    let mut labels = path.labels.clone();
                    if !t.label.is_epsilon() {
                        labels.push(t.label.clone());
                    }
                    let successor = Path {
                        state: t.target,
                        labels,
                    };
                    // An epsilon cycle reproduces a path that was already
                    // expanded; re-expanding it would never terminate.
                    if self.expanded.contains(&successor) {
                        continue;
                    }
                    let next = Weight {
                        cost: weight.cost + t.weight,
                        len: successor.labels.len(),
                    };
                    self.frontier.push_increase(successor, Reverse(next));
                }
            }
            if let Some(final_weight) = state.final_weight {
                return Some((weight.cost + final_weight, path.labels));
            }
        }
        None
    }
}
