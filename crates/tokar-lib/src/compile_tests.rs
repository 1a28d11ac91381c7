use insta::assert_snapshot;

use crate::compile::{compile, compile_nfa};
use crate::dfa::Dfa;
use crate::error::Error;
use crate::lexer::Span;

fn dfa_of(pattern: &str) -> Dfa {
    compile(pattern).expect("pattern compiles")
}

#[test]
fn concatenation_accepts_exactly_its_word() {
    let dfa = dfa_of("ab");
    assert!(dfa.accepts("ab"));
    assert!(!dfa.accepts(""));
    assert!(!dfa.accepts("a"));
    assert!(!dfa.accepts("b"));
    assert!(!dfa.accepts("ba"));
    assert!(!dfa.accepts("aab"));
    assert!(!dfa.accepts("aba"));
}

#[test]
fn union_accepts_either_branch() {
    let dfa = dfa_of("a|b");
    assert!(dfa.accepts("a"));
    assert!(dfa.accepts("b"));
    assert!(!dfa.accepts(""));
    assert!(!dfa.accepts("ab"));
    assert!(!dfa.accepts("ba"));
}

#[test]
fn star_accepts_every_repetition_count() {
    let dfa = dfa_of("a*");
    assert!(dfa.accepts(""));
    assert!(dfa.accepts("a"));
    assert!(dfa.accepts("aa"));
    assert!(dfa.accepts("aaaaaaaa"));
    assert!(!dfa.accepts("b"));
    assert!(!dfa.accepts("ab"));
    assert!(!dfa.accepts("aab"));
}

#[test]
fn the_textbook_pattern_matches_its_language() {
    let dfa = dfa_of("(a|b)*abb");
    assert!(dfa.accepts("abb"));
    assert!(dfa.accepts("aabb"));
    assert!(dfa.accepts("babb"));
    assert!(dfa.accepts("ababb"));
    assert!(dfa.accepts("bbbababb"));
    assert!(!dfa.accepts(""));
    assert!(!dfa.accepts("ab"));
    assert!(!dfa.accepts("aab"));
    assert!(!dfa.accepts("abab"));
    assert!(!dfa.accepts("abba"));
    assert!(!dfa.accepts("ba"));
}

#[test]
fn symbols_outside_the_alphabet_reject() {
    let dfa = dfa_of("(a|b)*abb");
    assert!(!dfa.accepts("abc"));
    assert!(!dfa.accepts("cabb"));
}

#[test]
fn compile_nfa_stops_before_determinization() {
    let nfa = compile_nfa("ab").expect("pattern compiles");
    assert_eq!(nfa.len(), 4);
    assert_eq!(nfa.start, 0);
    assert_eq!(nfa.accept, 3);
}

#[test]
fn syntax_errors_surface_with_their_spans() {
    let err = compile("(a|b").expect_err("pattern is rejected");
    assert_eq!(err, Error::UnbalancedParens { span: Span::new(0, 1) });
    assert!(err.is_syntax());
    assert!(!err.is_invariant());

    let err = compile("a+b").expect_err("pattern is rejected");
    assert_eq!(
        err,
        Error::UnsupportedSymbol {
            symbol: '+',
            span: Span::new(1, 2)
        }
    );
    assert!(err.is_syntax());
}

#[test]
fn an_nfa_serializes_to_json() {
    let nfa = compile_nfa("a").expect("pattern compiles");
    let json = serde_json::to_string_pretty(&nfa).expect("automata serialize");
    assert_snapshot!(json, @r#"
    {
      "states": [
        {
          "edges": {
            "a": [
              1
            ]
          },
          "epsilon": []
        },
        {
          "edges": {},
          "epsilon": []
        }
      ],
      "start": 0,
      "accept": 1
    }
    "#);
}

#[test]
fn a_dfa_serializes_to_json() {
    let json = serde_json::to_string_pretty(&dfa_of("ab")).expect("automata serialize");
    assert_snapshot!(json, @r#"
    {
      "states": [
        {
          "subset": [
            0
          ],
          "accepting": false,
          "transitions": {
            "a": 1
          }
        },
        {
          "subset": [
            1,
            2
          ],
          "accepting": false,
          "transitions": {
            "b": 2
          }
        },
        {
          "subset": [
            3
          ],
          "accepting": true,
          "transitions": {}
        }
      ],
      "start": 0
    }
    "#);
}
