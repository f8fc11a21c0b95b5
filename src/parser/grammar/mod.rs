//! Grammar module for the Shotel language
//!
//! The parsing rules are organized by category:
//! - `definition`: `fn` and `type` definitions, constructors and parameters
//! - `expression`: operator levels, application, literals and `case`
//! - `pattern`: case branches and the patterns on their left-hand side

mod definition;
mod expression;
mod pattern;

use tracing::debug;

use crate::ast::{Definition, Program};
use crate::token::{Token, TokenKind};

use super::combinators::{BoxedParser, expect, many_while, predict};
use super::state::{ParseError, ParseResult, ParseState, Parser};

pub use definition::{NameCase, constructor, fn_def, params, type_def};
pub use expression::expression;
pub use pattern::{branch, pattern};

fn starts_definition(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Fn | TokenKind::Type)
}

/// definition := "fn" fn_def | "type" type_def
pub fn definition() -> BoxedParser<Definition> {
    let keyword = predict("FN or TYPE", |kind| match kind {
        TokenKind::Fn => Some(expect(TokenKind::Fn) * fn_def()),
        TokenKind::Type => Some(expect(TokenKind::Type) * type_def()),
        _ => None,
    });

    keyword
        >> |parsed: Definition| {
            debug!(name = parsed.name(), "parsed definition");
            parsed
        }
}

/// program := definition*
pub fn program() -> BoxedParser<Program> {
    many_while(starts_definition, definition()) >> Program::new
}

/// Parse a complete program, requiring every token to be consumed.
pub fn parse(state: &mut ParseState) -> ParseResult<Program> {
    let program = program().parse(state)?;

    if let Some(token) = state.peek() {
        return Err(ParseError::TokensNotExhausted {
            found: token.describe(),
            position: token.position,
            remaining: state.remaining(),
        });
    }

    Ok(program)
}

pub fn parse_tokens(tokens: Vec<Token>) -> ParseResult<Program> {
    parse(&mut ParseState::new(tokens))
}
