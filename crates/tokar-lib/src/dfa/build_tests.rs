use insta::assert_snapshot;

use crate::dfa::{Dfa, determinize};
use crate::lexer::{extract_alphabet, lex};
use crate::nfa::build_nfa;
use crate::postfix::to_postfix;

fn dfa_of(pattern: &str) -> Dfa {
    let tokens = lex(pattern).expect("pattern lexes");
    let alphabet = extract_alphabet(&tokens);
    let postfix = to_postfix(&tokens).expect("pattern converts");
    let nfa = build_nfa(&postfix).expect("pattern builds");
    determinize(&nfa, &alphabet)
}

#[test]
fn a_word_becomes_a_chain() {
    assert_snapshot!(dfa_of("ab").dump(), @r"
    start: D0
    accept: D2
    D0 = {N0}: a → D1
    D1 = {N1, N2}: b → D2
    D2 = {N3}: ∅
    ");
}

#[test]
fn star_makes_the_start_accepting() {
    assert_snapshot!(dfa_of("a*").dump(), @r"
    start: D0
    accept: D0, D1
    D0 = {N0, N2, N3}: a → D1
    D1 = {N0, N1, N3}: a → D1
    ");
}

#[test]
fn union_reaches_two_accepting_states() {
    assert_snapshot!(dfa_of("a|b").dump(), @r"
    start: D0
    accept: D1, D2
    D0 = {N0, N2, N4}: a → D1; b → D2
    D1 = {N1, N5}: ∅
    D2 = {N3, N5}: ∅
    ");
}

#[test]
fn the_textbook_pattern_determinizes() {
    assert_snapshot!(dfa_of("(a|b)*abb").dump(), @r"
    start: D0
    accept: D4
    D0 = {N0, N2, N4, N6, N7, N8}: a → D1; b → D2
    D1 = {N0, N1, N2, N4, N5, N7, N8, N9, N10}: a → D1; b → D3
    D2 = {N0, N2, N3, N4, N5, N7, N8}: a → D1; b → D2
    D3 = {N0, N2, N3, N4, N5, N7, N8, N11, N12}: a → D1; b → D4
    D4 = {N0, N2, N3, N4, N5, N7, N8, N13}: a → D1; b → D2
    ");
}

#[test]
fn revisited_subsets_are_interned_once() {
    // Five of the fourteen-state NFA's 2^14 possible subsets are ever
    // reachable here; every a-transition lands on the same interned D1.
    let dfa = dfa_of("(a|b)*abb");
    assert_eq!(dfa.len(), 5);
    for state in &dfa.states {
        assert_eq!(state.transitions.get(&'a'), Some(&1));
    }
}

#[test]
fn determinization_is_stable_across_runs() {
    assert_eq!(dfa_of("(a|b)*abb").dump(), dfa_of("(a|b)*abb").dump());
}

#[test]
fn each_state_has_at_most_one_successor_per_symbol() {
    let dfa = dfa_of("(a|b)*abb");
    for state in &dfa.states {
        assert!(state.transitions.len() <= 2);
        for symbol in state.transitions.keys() {
            assert!(matches!(symbol, 'a' | 'b'));
        }
    }
}
