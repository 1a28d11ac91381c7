//! Error types for pattern compilation.

use crate::lexer::Span;

/// Everything that can go wrong between a pattern string and its DFA.
///
/// Variants fall into two classes. Syntax errors describe a problem in the
/// user's pattern and carry the offending span where one exists. The
/// `malformed postfix` variants signal a broken contract between the
/// converter and the NFA builder: a token stream that the converter would
/// never produce reached `build_nfa`. [`Error::is_syntax`] distinguishes
/// the two.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Character outside the supported grammar, whitespace included.
    #[error("unsupported symbol `{symbol}`")]
    UnsupportedSymbol { symbol: char, span: Span },

    /// `)` without a matching `(`, or `(` still open at the end.
    #[error("unbalanced parentheses")]
    UnbalancedParens { span: Span },

    /// Operator short of operands, e.g. `a|` or a lone `*`.
    #[error("dangling operator `{op}`")]
    DanglingOperator { op: char, span: Span },

    /// Pattern with nothing to match: empty input or a bare `()`.
    #[error("empty pattern")]
    EmptyPattern,

    /// Operator popped the fragment stack with too few entries.
    #[error("malformed postfix: operator `{op}` is missing an operand")]
    MissingOperand { op: char },

    /// Group token leaked into the postfix stream.
    #[error("malformed postfix: group token in operator stream")]
    StrayGroup,

    /// Postfix stream reduced to anything but a single fragment.
    #[error("malformed postfix: expected exactly one fragment, found {count}")]
    FragmentCount { count: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors caused by the input pattern. The caller can show
    /// these to the user as-is.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Error::UnsupportedSymbol { .. }
                | Error::UnbalancedParens { .. }
                | Error::DanglingOperator { .. }
                | Error::EmptyPattern
        )
    }

    /// True for construction-invariant violations: malformed postfix input
    /// reached the builder without passing through the converter.
    pub fn is_invariant(&self) -> bool {
        !self.is_syntax()
    }

    /// Byte range in the pattern the error points at, when one exists.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::UnsupportedSymbol { span, .. }
            | Error::UnbalancedParens { span }
            | Error::DanglingOperator { span, .. } => Some(*span),
            _ => None,
        }
    }
}
