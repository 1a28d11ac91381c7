//! Thompson's construction: postfix pattern to ε-NFA.
//!
//! Each grammar construct maps to a fixed-shape fragment with one entry and
//! one exit. Operators never rewire the inside of an operand, only its two
//! endpoints, which is what keeps the assembly a single stack pass.

use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};
use crate::nfa::state::{Nfa, NfaState, StateId};

/// A partial automaton with one entry and one exit state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub start: StateId,
    pub accept: StateId,
}

/// Allocates states and wires fragments together.
///
/// Every builder owns its arena, so ids always start at zero and two builds
/// of the same pattern produce identical automata.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    states: Vec<NfaState>,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state, numbered by arena position.
    pub fn add_state(&mut self) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(NfaState::default());
        id
    }

    pub fn add_edge(&mut self, from: StateId, symbol: char, to: StateId) {
        self.states[from as usize]
            .edges
            .entry(symbol)
            .or_default()
            .push(to);
    }

    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from as usize].epsilon.push(to);
    }

    /// `start ──symbol──▶ accept`
    pub fn literal(&mut self, symbol: char) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.add_edge(start, symbol, accept);
        Fragment { start, accept }
    }

    /// Chain `left` into `right` with one ε-edge.
    pub fn concat(&mut self, left: Fragment, right: Fragment) -> Fragment {
        self.add_epsilon(left.accept, right.start);
        Fragment {
            start: left.start,
            accept: right.accept,
        }
    }

    /// Fresh endpoints branching into both operands, left one first.
    pub fn union(&mut self, left: Fragment, right: Fragment) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.add_epsilon(start, left.start);
        self.add_epsilon(start, right.start);
        self.add_epsilon(left.accept, accept);
        self.add_epsilon(right.accept, accept);
        Fragment { start, accept }
    }

    /// Fresh endpoints around `inner` with a skip edge and a loop-back edge.
    pub fn star(&mut self, inner: Fragment) -> Fragment {
        let start = self.add_state();
        let accept = self.add_state();
        self.add_epsilon(start, inner.start);
        self.add_epsilon(start, accept);
        self.add_epsilon(inner.accept, inner.start);
        self.add_epsilon(inner.accept, accept);
        Fragment { start, accept }
    }

    /// Seal the arena, taking `fragment` as the automaton's endpoints.
    pub fn finish(self, fragment: Fragment) -> Nfa {
        Nfa {
            states: self.states,
            start: fragment.start,
            accept: fragment.accept,
        }
    }
}

/// Assemble an ε-NFA from a postfix token stream.
///
/// The stream must be well formed postfix as produced by
/// [`to_postfix`](crate::postfix::to_postfix). A malformed stream is
/// reported as an invariant error: it means a bug upstream, not bad user
/// input.
pub fn build_nfa(postfix: &[Token]) -> Result<Nfa> {
    let mut builder = NfaBuilder::new();
    let mut stack: Vec<Fragment> = Vec::new();

    for &token in postfix {
        let fragment = match token.kind {
            TokenKind::Literal(symbol) => builder.literal(symbol),
            TokenKind::Star => {
                let inner = pop_operand(&mut stack, '*')?;
                builder.star(inner)
            }
            TokenKind::Union => {
                let right = pop_operand(&mut stack, '|')?;
                let left = pop_operand(&mut stack, '|')?;
                builder.union(left, right)
            }
            TokenKind::Concat => {
                let right = pop_operand(&mut stack, '.')?;
                let left = pop_operand(&mut stack, '.')?;
                builder.concat(left, right)
            }
            TokenKind::GroupOpen | TokenKind::GroupClose => return Err(Error::StrayGroup),
        };
        stack.push(fragment);
    }

    match stack.as_slice() {
        [fragment] => Ok(builder.finish(*fragment)),
        _ => Err(Error::FragmentCount { count: stack.len() }),
    }
}

fn pop_operand(stack: &mut Vec<Fragment>, op: char) -> Result<Fragment> {
    stack.pop().ok_or(Error::MissingOperand { op })
}
