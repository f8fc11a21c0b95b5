use std::ops::{Add, Mul, Shr, Sub};
use std::rc::Rc;

use crate::token::{Token, TokenKind};

use super::state::{ParseResult, ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let _ = other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let _ = self.parse(state)?;
            other.parse(state)
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

/// Consume the next token if `predicate` accepts it.
fn token_with_error<F: Fn(&Token) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<Token> {
    BoxedParser::new(move |state: &mut ParseState| match state.peek() {
        Some(tok) if predicate(tok) => state.advance().ok_or_else(|| state.unexpected(expected)),
        _ => Err(state.unexpected(expected)),
    })
}

/// Consume a token of the given kind.
pub fn expect(kind: TokenKind) -> BoxedParser<Token> {
    token_with_error(move |t| t.kind == kind, kind.name())
}

/// Consume a token of the given kind and return its textual payload.
pub fn expect_text(kind: TokenKind) -> BoxedParser<String> {
    expect(kind) >> |token: Token| token.text_value().unwrap_or_default().to_string()
}

pub fn expect_int() -> BoxedParser<i128> {
    expect(TokenKind::Int) >> |token: Token| token.int_value().unwrap_or_default()
}

/// Pick the parser for the next token's kind without consuming anything.
///
/// `select` returning `None`, or an exhausted stream, is reported against
/// `expected`.
pub fn predict<T: 'static, F>(expected: &'static str, select: F) -> BoxedParser<T>
where
    F: Fn(TokenKind) -> Option<BoxedParser<T>> + 'static,
{
    BoxedParser::new(move |state: &mut ParseState| {
        match state.peek_kind().and_then(&select) {
            Some(parser) => parser.parse(state),
            None => Err(state.unexpected(expected)),
        }
    })
}

/// Parse zero or more occurrences, for as long as the next token's kind
/// satisfies `starts`.
pub fn many_while<T: 'static, F>(starts: F, parser: BoxedParser<T>) -> BoxedParser<Vec<T>>
where
    F: Fn(TokenKind) -> bool + 'static,
{
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        while state.peek_kind().is_some_and(&starts) {
            results.push(parser.parse(state)?);
        }
        Ok(results)
    })
}

/// Parse one occurrence, then more for as long as `starts` accepts the next
/// token's kind.
pub fn many1_while<T: 'static, F>(starts: F, parser: BoxedParser<T>) -> BoxedParser<Vec<T>>
where
    F: Fn(TokenKind) -> bool + 'static,
{
    parser.clone() + many_while(starts, parser) >> prepend
}

/// `item (separator item)*`
pub fn separated1<T: 'static>(item: BoxedParser<T>, separator: TokenKind) -> BoxedParser<Vec<T>> {
    let rest = many_while(move |kind| kind == separator, expect(separator) * item.clone());
    item + rest >> prepend
}

fn prepend<T>((first, rest): (T, Vec<T>)) -> Vec<T> {
    let mut results = Vec::with_capacity(rest.len() + 1);
    results.push(first);
    results.extend(rest);
    results
}
