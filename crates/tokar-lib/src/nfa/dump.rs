//! Human-readable rendering of an ε-NFA.

use std::fmt::{self, Write};

use crate::nfa::state::{Nfa, NfaState, StateId};

/// Renders an automaton one state per line, endpoints first.
pub struct NfaPrinter<'a> {
    nfa: &'a Nfa,
}

impl<'a> NfaPrinter<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Self { nfa }
    }

    pub fn format(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "start: N{}", self.nfa.start)?;
        writeln!(out, "accept: N{}", self.nfa.accept)?;
        for (id, state) in self.nfa.states.iter().enumerate() {
            write!(out, "N{id}: ")?;
            format_state(out, state)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn format_state(out: &mut impl Write, state: &NfaState) -> fmt::Result {
    if state.edges.is_empty() && state.epsilon.is_empty() {
        return write!(out, "∅");
    }
    let mut first = true;
    for (symbol, targets) in &state.edges {
        if !first {
            write!(out, "; ")?;
        }
        first = false;
        write!(out, "{symbol} → ")?;
        format_targets(out, targets)?;
    }
    if !state.epsilon.is_empty() {
        if !first {
            write!(out, "; ")?;
        }
        write!(out, "ε → ")?;
        format_targets(out, &state.epsilon)?;
    }
    Ok(())
}

fn format_targets(out: &mut impl Write, targets: &[StateId]) -> fmt::Result {
    for (index, id) in targets.iter().enumerate() {
        if index > 0 {
            write!(out, ", ")?;
        }
        write!(out, "N{id}")?;
    }
    Ok(())
}

impl Nfa {
    pub fn printer(&self) -> NfaPrinter<'_> {
        NfaPrinter::new(self)
    }

    /// Render to a string. Stable across runs for the same pattern.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.printer()
            .format(&mut out)
            .expect("String write never fails");
        out
    }
}
