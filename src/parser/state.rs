use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A production needed another token but the stream was exhausted.
    #[error("unexpected end of input: expected {expected}")]
    InvalidEof { expected: String },

    /// The next token does not fit the production being parsed.
    #[error("unexpected token {found} at record {position}: expected {expected}")]
    InvalidToken {
        expected: String,
        found: String,
        kind: TokenKind,
        position: usize,
    },

    /// Tokens remain after a complete program.
    #[error("unexpected token {found} at record {position}: expected FN or TYPE ({remaining} tokens left over)")]
    TokensNotExhausted {
        found: String,
        position: usize,
        remaining: usize,
    },
}

impl ParseError {
    /// Name of the error kind as reported to users.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::InvalidEof { .. } => "InvalidEOFError",
            ParseError::InvalidToken { .. } => "InvalidTokenError",
            ParseError::TokensNotExhausted { .. } => "TokensNotExhaustedError",
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Cursor over the token stream. Parsing is predictive, so the cursor only
/// ever moves forward.
pub struct ParseState {
    tokens: Vec<Token>,
    index: usize,
}

impl ParseState {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, index: 0 }
    }

    pub fn advance(&mut self) -> Option<Token> {
        if self.has_next() {
            let token = self.tokens[self.index].clone();
            self.index += 1;
            Some(token)
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.index)
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    pub fn next_is(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.index
    }

    /// Error for the current token not matching `expected`, or for the end of
    /// input if there is none.
    pub fn unexpected(&self, expected: &str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::InvalidToken {
                expected: expected.to_string(),
                found: token.describe(),
                kind: token.kind,
                position: token.position,
            },
            None => ParseError::InvalidEof {
                expected: expected.to_string(),
            },
        }
    }
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_reports_current_token() {
        let state = ParseState::new(vec![Token::text(TokenKind::Lid, "x").at(3)]);
        assert_eq!(
            state.unexpected("UID"),
            ParseError::InvalidToken {
                expected: "UID".into(),
                found: "LID(x)".into(),
                kind: TokenKind::Lid,
                position: 3,
            }
        );
    }

    #[test]
    fn test_unexpected_at_end_of_input() {
        let mut state = ParseState::new(vec![Token::new(TokenKind::Fn)]);
        state.advance();
        let err = state.unexpected("UID");
        assert_eq!(err.kind(), "InvalidEOFError");
        assert_eq!(state.remaining(), 0);
    }
}
