//! Infix to postfix conversion of the pattern grammar.
//!
//! Classic shunting yard over the token stream. Concatenation has no source
//! form, so it is made explicit here: a `Concat` token is inserted wherever
//! two operands sit next to each other (`ab`, `a(`, `)(`, `*a`).

use crate::error::{Error, Result};
use crate::lexer::{Span, Token, TokenKind};

/// Binding strength; higher binds tighter. Group markers never bind.
fn precedence(kind: TokenKind) -> u8 {
    match kind {
        TokenKind::Star => 3,
        TokenKind::Concat => 2,
        TokenKind::Union => 1,
        _ => 0,
    }
}

/// True when a token can end an operand, meaning an operand right after it
/// implies concatenation.
fn ends_operand(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Literal(_) | TokenKind::GroupClose | TokenKind::Star
    )
}

/// Convert a token stream to postfix order.
///
/// `*` is postfix-unary in the source already and goes straight to the
/// output. `|` and the synthesized `Concat` drain the stack of operators
/// binding at least as tight before being stacked themselves. A closing
/// group pops down to its opening marker and discards it.
///
/// Unmatched group markers are reported as [`Error::UnbalancedParens`] with
/// the marker's span — including an opening marker still on the stack at
/// flush time. After flushing, an operand-count walk over the output
/// reports the first operator short of operands as
/// [`Error::DanglingOperator`], and a stream with no operands at all as
/// [`Error::EmptyPattern`].
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len() * 2);
    let mut stack: Vec<Token> = Vec::new();
    let mut prev: Option<TokenKind> = None;

    for &token in tokens {
        match token.kind {
            TokenKind::Literal(_) => {
                if prev.is_some_and(ends_operand) {
                    push_concat(&mut output, &mut stack, token.span);
                }
                output.push(token);
            }
            TokenKind::GroupOpen => {
                if prev.is_some_and(ends_operand) {
                    push_concat(&mut output, &mut stack, token.span);
                }
                stack.push(token);
            }
            TokenKind::GroupClose => loop {
                match stack.pop() {
                    Some(top) if top.kind == TokenKind::GroupOpen => break,
                    Some(top) => output.push(top),
                    None => return Err(Error::UnbalancedParens { span: token.span }),
                }
            },
            TokenKind::Star => output.push(token),
            TokenKind::Union | TokenKind::Concat => {
                drain_while_binding(&mut output, &mut stack, precedence(token.kind));
                stack.push(token);
            }
        }
        prev = Some(token.kind);
    }

    while let Some(top) = stack.pop() {
        if top.kind == TokenKind::GroupOpen {
            return Err(Error::UnbalancedParens { span: top.span });
        }
        output.push(top);
    }

    check_operands(&output)?;
    Ok(output)
}

/// Insert the implicit concatenation operator. The marker takes a
/// zero-width span anchored at the operand that triggered it.
fn push_concat(output: &mut Vec<Token>, stack: &mut Vec<Token>, next: Span) {
    drain_while_binding(output, stack, precedence(TokenKind::Concat));
    stack.push(Token {
        kind: TokenKind::Concat,
        span: Span::empty(next.start),
    });
}

/// Move operators with precedence ≥ `min` from the stack to the output.
fn drain_while_binding(output: &mut Vec<Token>, stack: &mut Vec<Token>, min: u8) {
    while let Some(&top) = stack.last() {
        if precedence(top.kind) < min {
            break;
        }
        stack.pop();
        output.push(top);
    }
}

/// Walk the finished postfix stream counting virtual operands: literals add
/// one, binary operators consume two and add one, `*` needs one in place.
fn check_operands(output: &[Token]) -> Result<()> {
    let mut depth = 0usize;
    for &token in output {
        match token.kind {
            TokenKind::Literal(_) => depth += 1,
            TokenKind::Star => {
                if depth == 0 {
                    return Err(dangling(token));
                }
            }
            TokenKind::Union | TokenKind::Concat => {
                if depth < 2 {
                    return Err(dangling(token));
                }
                depth -= 1;
            }
            TokenKind::GroupOpen | TokenKind::GroupClose => {
                unreachable!("group tokens never reach postfix output")
            }
        }
    }
    match depth {
        1 => Ok(()),
        0 => Err(Error::EmptyPattern),
        _ => unreachable!("adjacent operands always get a concatenation operator"),
    }
}

fn dangling(token: Token) -> Error {
    Error::DanglingOperator {
        op: operator_char(token.kind),
        span: token.span,
    }
}

/// Display character for an operator kind; the synthesized concatenation
/// shows as `.`.
fn operator_char(kind: TokenKind) -> char {
    match kind {
        TokenKind::Star => '*',
        TokenKind::Union => '|',
        _ => '.',
    }
}
