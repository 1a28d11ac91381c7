//! End-to-end pipeline entry points.

use crate::dfa::{Dfa, determinize};
use crate::error::Result;
use crate::lexer::{extract_alphabet, lex};
use crate::nfa::{Nfa, build_nfa};
use crate::postfix::to_postfix;

/// Compile a pattern all the way down to a DFA.
pub fn compile(pattern: &str) -> Result<Dfa> {
    let tokens = lex(pattern)?;
    let alphabet = extract_alphabet(&tokens);
    let postfix = to_postfix(&tokens)?;
    let nfa = build_nfa(&postfix)?;
    Ok(determinize(&nfa, &alphabet))
}

/// Compile a pattern to its ε-NFA, stopping before determinization.
pub fn compile_nfa(pattern: &str) -> Result<Nfa> {
    let tokens = lex(pattern)?;
    let postfix = to_postfix(&tokens)?;
    build_nfa(&postfix)
}
