//! Reachability primitives the determinizer is built from.

use crate::nfa::state::{Nfa, StateId, StateSet};

/// All states reachable from `seeds` over ε-edges alone, seeds included.
///
/// Depth-first over the ε-edges; the result set doubles as the visited set,
/// so ε-cycles (every `*` makes one) terminate.
pub fn epsilon_closure(nfa: &Nfa, seeds: &StateSet) -> StateSet {
    let mut closure = seeds.clone();
    let mut pending: Vec<StateId> = seeds.iter().collect();
    while let Some(id) = pending.pop() {
        for &next in &nfa.state(id).epsilon {
            if !closure.contains(next) {
                closure.insert(next);
                pending.push(next);
            }
        }
    }
    closure
}

/// States reached from `from` by consuming exactly `symbol`.
///
/// No ε-closure is taken here; callers compose the two steps.
pub fn move_on(nfa: &Nfa, from: &StateSet, symbol: char) -> StateSet {
    let mut reached = StateSet::with_capacity(nfa.len());
    for id in from.iter() {
        if let Some(targets) = nfa.state(id).edges.get(&symbol) {
            for &next in targets {
                reached.insert(next);
            }
        }
    }
    reached
}
