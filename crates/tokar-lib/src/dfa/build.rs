//! Subset construction: ε-NFA to DFA.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::nfa::{Nfa, StateSet, epsilon_closure, move_on};

/// Index of a state in its owning [`Dfa`].
pub type DfaId = u32;

/// One deterministic state and the NFA subset it stands for.
#[derive(Debug, Clone, Serialize)]
pub struct DfaState {
    /// The NFA states this state stands for.
    pub subset: StateSet,
    /// Whether the subset contains the NFA accept state.
    pub accepting: bool,
    /// At most one successor per symbol, in alphabet order.
    pub transitions: IndexMap<char, DfaId>,
}

/// A DFA produced by [`determinize`]. States are numbered in discovery
/// order with the start closure at zero.
#[derive(Debug, Clone, Serialize)]
pub struct Dfa {
    pub states: Vec<DfaState>,
    pub start: DfaId,
}

impl Dfa {
    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: DfaId) -> &DfaState {
        &self.states[id as usize]
    }

    /// Ids of accepting states, ascending.
    pub fn accepting(&self) -> impl Iterator<Item = DfaId> + '_ {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, state)| state.accepting)
            .map(|(id, _)| id as DfaId)
    }

    /// Run the automaton over `input`, one transition per character.
    ///
    /// A character with no outgoing edge rejects immediately; this covers
    /// symbols the pattern never mentioned.
    pub fn accepts(&self, input: &str) -> bool {
        let mut current = self.start;
        for ch in input.chars() {
            match self.state(current).transitions.get(&ch) {
                Some(&next) => current = next,
                None => return false,
            }
        }
        self.state(current).accepting
    }
}

/// Determinize `nfa` over `alphabet`.
///
/// Classic worklist subset construction. Every discovered subset is
/// interned in a canonical table, so a subset reached along two routes gets
/// one id and is expanded once; the result has at most `2^n` states for an
/// `n`-state input, and in practice far fewer.
pub fn determinize(nfa: &Nfa, alphabet: &IndexSet<char>) -> Dfa {
    Determinizer::new(nfa).run(alphabet)
}

struct Determinizer<'a> {
    nfa: &'a Nfa,
    /// Canonical subset table; table position is the state id.
    table: IndexMap<StateSet, DfaId>,
    /// Outgoing edges per state, parallel to `table`.
    transitions: Vec<IndexMap<char, DfaId>>,
    /// Ids interned but not yet expanded.
    worklist: Vec<DfaId>,
}

impl<'a> Determinizer<'a> {
    fn new(nfa: &'a Nfa) -> Self {
        Self {
            nfa,
            table: IndexMap::new(),
            transitions: Vec::new(),
            worklist: Vec::new(),
        }
    }

    /// Id for a subset, allocating and scheduling it when unseen.
    fn intern(&mut self, subset: StateSet) -> DfaId {
        if let Some(&id) = self.table.get(&subset) {
            return id;
        }
        let id = self.table.len() as DfaId;
        self.table.insert(subset, id);
        self.transitions.push(IndexMap::new());
        self.worklist.push(id);
        id
    }

    fn run(mut self, alphabet: &IndexSet<char>) -> Dfa {
        let seed = StateSet::singleton(self.nfa.len(), self.nfa.start);
        self.intern(epsilon_closure(self.nfa, &seed));

        while let Some(id) = self.worklist.pop() {
            let Some((subset, _)) = self.table.get_index(id as usize) else {
                unreachable!("worklist ids come from the table")
            };
            let subset = subset.clone();
            for &symbol in alphabet {
                let reached = move_on(self.nfa, &subset, symbol);
                if reached.is_empty() {
                    continue;
                }
                let target = self.intern(epsilon_closure(self.nfa, &reached));
                self.transitions[id as usize].insert(symbol, target);
            }
        }

        self.finish()
    }

    fn finish(self) -> Dfa {
        let accept = self.nfa.accept;
        let states = self
            .table
            .into_keys()
            .zip(self.transitions)
            .map(|(subset, transitions)| DfaState {
                accepting: subset.contains(accept),
                subset,
                transitions,
            })
            .collect();
        Dfa { states, start: 0 }
    }
}
