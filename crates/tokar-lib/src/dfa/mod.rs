//! The deterministic half of the pipeline.
//!
//! [`determinize`] runs worklist subset construction over an ε-NFA,
//! interning each discovered state subset exactly once, and hands back a
//! [`Dfa`] that can be run over input with [`Dfa::accepts`].

mod build;
mod dump;

#[cfg(test)]
mod build_tests;

pub use build::{Dfa, DfaId, DfaState, determinize};
pub use dump::DfaPrinter;
