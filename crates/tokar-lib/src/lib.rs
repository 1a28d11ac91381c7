//! Tokar: regular expressions compiled to deterministic finite automata.
//!
//! A pattern over alphanumeric literals, `(` `)` grouping, `|` alternation
//! and `*` repetition (concatenation is juxtaposition) runs through the
//! classical pipeline: tokenization, shunting-yard conversion to postfix,
//! Thompson's construction of an epsilon-NFA, and subset construction of
//! the final DFA.
//!
//! # Example
//!
//! ```
//! let dfa = tokar_lib::compile("(a|b)*abb").expect("pattern is well formed");
//!
//! assert!(dfa.accepts("aabb"));
//! assert!(!dfa.accepts("ab"));
//! ```
//!
//! Each stage is public for callers that want the intermediate artifacts:
//! [`lex`] → [`to_postfix`] → [`build_nfa`] → [`determinize`], with
//! [`extract_alphabet`] bounding the symbols the determinizer explores.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod dfa;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod nfa;
pub mod postfix;

mod compile;

#[cfg(test)]
mod compile_tests;

pub use compile::{compile, compile_nfa};
pub use dfa::{Dfa, DfaId, DfaState, determinize};
pub use diagnostics::ErrorPrinter;
pub use error::{Error, Result};
pub use lexer::{Span, Token, TokenKind, extract_alphabet, lex};
pub use nfa::{
    Fragment, Nfa, NfaBuilder, NfaState, StateId, StateSet, build_nfa, epsilon_closure, move_on,
};
pub use postfix::to_postfix;
