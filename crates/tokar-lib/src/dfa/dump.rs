//! Human-readable rendering of a DFA.

use std::fmt::{self, Write};

use crate::dfa::build::{Dfa, DfaState};

/// Renders a DFA one state per line, each with the NFA subset it stands
/// for.
pub struct DfaPrinter<'a> {
    dfa: &'a Dfa,
}

impl<'a> DfaPrinter<'a> {
    pub fn new(dfa: &'a Dfa) -> Self {
        Self { dfa }
    }

    pub fn format(&self, out: &mut impl Write) -> fmt::Result {
        writeln!(out, "start: D{}", self.dfa.start)?;
        write!(out, "accept: ")?;
        let mut first = true;
        for id in self.dfa.accepting() {
            if !first {
                write!(out, ", ")?;
            }
            first = false;
            write!(out, "D{id}")?;
        }
        if first {
            write!(out, "∅")?;
        }
        writeln!(out)?;
        for (id, state) in self.dfa.states.iter().enumerate() {
            write!(out, "D{id} = ")?;
            format_state(out, state)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn format_state(out: &mut impl Write, state: &DfaState) -> fmt::Result {
    write!(out, "{{")?;
    for (index, nfa_id) in state.subset.iter().enumerate() {
        if index > 0 {
            write!(out, ", ")?;
        }
        write!(out, "N{nfa_id}")?;
    }
    write!(out, "}}: ")?;
    if state.transitions.is_empty() {
        return write!(out, "∅");
    }
    for (index, (symbol, target)) in state.transitions.iter().enumerate() {
        if index > 0 {
            write!(out, "; ")?;
        }
        write!(out, "{symbol} → D{target}")?;
    }
    Ok(())
}

impl Dfa {
    pub fn printer(&self) -> DfaPrinter<'_> {
        DfaPrinter::new(self)
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
