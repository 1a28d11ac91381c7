//! Arena storage for the ε-NFA and the state subsets built over it.

use fixedbitset::FixedBitSet;
use indexmap::IndexMap;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// Index of a state in its owning [`Nfa`] arena.
pub type StateId = u32;

/// One ε-NFA state: labeled edges plus ε-edges, each in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NfaState {
    /// Successors per input symbol.
    pub edges: IndexMap<char, Vec<StateId>>,
    /// Successors reached without consuming input.
    pub epsilon: Vec<StateId>,
}

/// An ε-NFA held as a state arena.
///
/// Ids are positions in `states`, handed out in construction order, so a
/// freshly built automaton always numbers from zero.
#[derive(Debug, Clone, Serialize)]
pub struct Nfa {
    pub states: Vec<NfaState>,
    pub start: StateId,
    pub accept: StateId,
}

impl Nfa {
    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        &self.states[id as usize]
    }
}

/// A set of NFA states.
///
/// Backed by a bitset fixed to the width of the owning arena, so two sets
/// over the same arena compare and hash identically no matter what order
/// their members went in. Keep every set for one arena at that arena's
/// width; [`insert`](Self::insert) only grows the backing store for ids
/// past it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StateSet {
    bits: FixedBitSet,
}

impl StateSet {
    /// Empty set sized for an arena of `capacity` states.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    /// Single-member set sized for an arena of `capacity` states.
    pub fn singleton(capacity: usize, id: StateId) -> Self {
        let mut set = Self::with_capacity(capacity);
        set.insert(id);
        set
    }

    pub fn insert(&mut self, id: StateId) {
        let index = id as usize;
        if index >= self.bits.len() {
            self.bits.grow(index + 1);
        }
        self.bits.insert(index);
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.bits.contains(id as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    /// Member ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.bits.ones().map(|index| index as StateId)
    }
}

/// Serialized as the ascending id sequence, not the raw bit blocks.
impl Serialize for StateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for id in self.iter() {
            seq.serialize_element(&id)?;
        }
        seq.end()
    }
}
