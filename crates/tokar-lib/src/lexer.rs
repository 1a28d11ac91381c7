//! Tokenization of the pattern grammar.
//!
//! One explicit pass turns the pattern string into classified tokens before
//! any precedence handling happens. Characters outside the grammar are
//! reported as unsupported up front instead of leaking into later stages as
//! accidental literals.

use indexmap::IndexSet;
use logos::Logos;

use crate::error::{Error, Result};

/// Byte range of a token in the pattern source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Zero-width span, used for operators synthesized between tokens.
    pub fn empty(at: u32) -> Self {
        Self { start: at, end: at }
    }

    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self {
            start: range.start as u32,
            end: range.end as u32,
        }
    }
}

/// Token kinds of the pattern grammar.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// ASCII alphanumeric literal, carrying its symbol.
    #[regex(r"[0-9A-Za-z]", |lex| lex.slice().chars().next())]
    Literal(char),

    #[token("(")]
    GroupOpen,

    #[token(")")]
    GroupClose,

    #[token("|")]
    Union,

    #[token("*")]
    Star,

    /// Implicit concatenation. Never produced by the lexer; the postfix
    /// converter synthesizes it where juxtaposition occurred.
    Concat,
}

/// A classified token with its source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Tokenize a pattern.
///
/// The grammar is literals, `(`, `)`, `|` and `*` only. The first character
/// outside it (whitespace included) aborts lexing with an
/// [`Error::UnsupportedSymbol`] naming the character and its span.
pub fn lex(pattern: &str) -> Result<Vec<Token>> {
    let mut lexer = TokenKind::lexer(pattern);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = Span::from(lexer.span());
        match result {
            Ok(kind) => tokens.push(Token { kind, span }),
            Err(()) => {
                let symbol = lexer
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Error::UnsupportedSymbol { symbol, span });
            }
        }
    }

    Ok(tokens)
}

/// Distinct literal symbols of a token stream, in first-appearance order.
///
/// Only used to bound the symbols subset construction explores; the stable
/// order keeps determinization reproducible.
pub fn extract_alphabet(tokens: &[Token]) -> IndexSet<char> {
    tokens
        .iter()
        .filter_map(|token| match token.kind {
            TokenKind::Literal(symbol) => Some(symbol),
            _ => None,
        })
        .collect()
}
