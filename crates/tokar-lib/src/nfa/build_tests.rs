use insta::assert_snapshot;

use crate::error::Error;
use crate::lexer::{Span, Token, TokenKind, lex};
use crate::nfa::{Nfa, build_nfa};
use crate::postfix::to_postfix;

fn nfa_of(pattern: &str) -> Nfa {
    let tokens = lex(pattern).expect("pattern lexes");
    let postfix = to_postfix(&tokens).expect("pattern converts");
    build_nfa(&postfix).expect("pattern builds")
}

fn token(kind: TokenKind, start: u32, end: u32) -> Token {
    Token {
        kind,
        span: Span::new(start, end),
    }
}

#[test]
fn literal_is_a_two_state_fragment() {
    assert_snapshot!(nfa_of("a").dump(), @r"
    start: N0
    accept: N1
    N0: a → N1
    N1: ∅
    ");
}

#[test]
fn concatenation_bridges_with_one_epsilon() {
    assert_snapshot!(nfa_of("ab").dump(), @r"
    start: N0
    accept: N3
    N0: a → N1
    N1: ε → N2
    N2: b → N3
    N3: ∅
    ");
}

#[test]
fn union_forks_from_a_fresh_start() {
    assert_snapshot!(nfa_of("a|b").dump(), @r"
    start: N4
    accept: N5
    N0: a → N1
    N1: ε → N5
    N2: b → N3
    N3: ε → N5
    N4: ε → N0, N2
    N5: ∅
    ");
}

#[test]
fn star_adds_skip_and_loop_edges() {
    assert_snapshot!(nfa_of("a*").dump(), @r"
    start: N2
    accept: N3
    N0: a → N1
    N1: ε → N0, N3
    N2: ε → N0, N3
    N3: ∅
    ");
}

#[test]
fn the_textbook_pattern_wires_up() {
    assert_snapshot!(nfa_of("(a|b)*abb").dump(), @r"
    start: N6
    accept: N13
    N0: a → N1
    N1: ε → N5
    N2: b → N3
    N3: ε → N5
    N4: ε → N0, N2
    N5: ε → N4, N7
    N6: ε → N4, N7
    N7: ε → N8
    N8: a → N9
    N9: ε → N10
    N10: b → N11
    N11: ε → N12
    N12: b → N13
    N13: ∅
    ");
}

#[test]
fn state_ids_restart_for_every_build() {
    // A shared counter would number the second automaton from 4 up.
    let first = nfa_of("ab");
    let second = nfa_of("ab");
    assert_eq!(first.dump(), second.dump());
    assert_eq!(second.start, 0);
}

#[test]
fn star_without_an_operand_is_an_invariant_error() {
    let postfix = [token(TokenKind::Star, 0, 1)];
    let err = build_nfa(&postfix).expect_err("stream is malformed");
    assert_eq!(err, Error::MissingOperand { op: '*' });
    assert!(err.is_invariant());
}

#[test]
fn union_short_one_operand_is_reported() {
    let postfix = [token(TokenKind::Literal('a'), 0, 1), token(TokenKind::Union, 1, 2)];
    let err = build_nfa(&postfix).expect_err("stream is malformed");
    assert_eq!(err, Error::MissingOperand { op: '|' });
}

#[test]
fn group_tokens_never_reach_the_builder() {
    let postfix = [token(TokenKind::GroupOpen, 0, 1)];
    let err = build_nfa(&postfix).expect_err("stream is malformed");
    assert_eq!(err, Error::StrayGroup);
}

#[test]
fn loose_fragments_are_counted() {
    let postfix = [token(TokenKind::Literal('a'), 0, 1), token(TokenKind::Literal('b'), 1, 2)];
    let err = build_nfa(&postfix).expect_err("stream is malformed");
    assert_eq!(err, Error::FragmentCount { count: 2 });

    let err = build_nfa(&[]).expect_err("stream is empty");
    assert_eq!(err, Error::FragmentCount { count: 0 });
}
