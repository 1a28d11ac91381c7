//! The nondeterministic half of the pipeline.
//!
//! [`build_nfa`] assembles Thompson fragments out of a postfix token
//! stream into an arena-backed ε-NFA; [`epsilon_closure`] and [`move_on`]
//! are the reachability primitives the determinizer later drives over it.

mod build;
mod closure;
mod dump;
mod state;

#[cfg(test)]
mod build_tests;

pub use build::{Fragment, NfaBuilder, build_nfa};
pub use closure::{epsilon_closure, move_on};
pub use dump::NfaPrinter;
pub use state::{Nfa, NfaState, StateId, StateSet};
