//! Pattern parsers for the Shotel language

use crate::ast::{Branch, Expression, Pattern};
use crate::parser::combinators::{BoxedParser, expect, expect_text, many1_while, predict};
use crate::token::TokenKind;

use super::definition::{NameCase, constructor};
use super::expression::expression;

/// pattern := LID | UID LID*
pub fn pattern() -> BoxedParser<Pattern> {
    predict("a pattern", |kind| match kind {
        TokenKind::Lid => Some(expect_text(TokenKind::Lid) >> Pattern::Var),
        TokenKind::Uid => Some(
            constructor(NameCase::Lower)
                >> |(name, params): (String, Vec<String>)| Pattern::Constructor { name, params },
        ),
        _ => None,
    })
}

/// branch := "|" pattern "=>" "{" expression "}"
pub fn branch() -> BoxedParser<Branch> {
    expect(TokenKind::Pattern) * pattern() - expect(TokenKind::Arrow) - expect(TokenKind::OCurly)
        + expression()
        - expect(TokenKind::CCurly)
        >> |(pattern, body): (Pattern, Expression)| Branch { pattern, body }
}

/// branches := branch+
pub fn branches() -> BoxedParser<Vec<Branch>> {
    many1_while(|kind| kind == TokenKind::Pattern, branch())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::state::{ParseError, ParseState, Parser};
    use crate::token::Token;

    #[test]
    fn test_constructor_pattern_takes_lowercase_params() {
        let mut state = ParseState::new(vec![
            Token::text(TokenKind::Uid, "Cons"),
            Token::text(TokenKind::Lid, "head"),
            Token::text(TokenKind::Lid, "tail"),
        ]);
        assert_eq!(
            pattern().parse(&mut state),
            Ok(Pattern::constructor("Cons", vec!["head", "tail"]))
        );
    }

    #[test]
    fn test_constructor_pattern_stops_at_uppercase() {
        let mut state = ParseState::new(vec![
            Token::text(TokenKind::Uid, "Cons"),
            Token::text(TokenKind::Uid, "Int"),
        ]);
        assert_eq!(
            pattern().parse(&mut state),
            Ok(Pattern::constructor::<&str>("Cons", vec![]))
        );
        assert!(state.next_is(TokenKind::Uid));
    }

    #[test]
    fn test_branch() {
        let mut state = ParseState::new(vec![
            Token::new(TokenKind::Pattern),
            Token::text(TokenKind::Lid, "x"),
            Token::new(TokenKind::Arrow),
            Token::new(TokenKind::OCurly),
            Token::int(1),
            Token::new(TokenKind::CCurly),
        ]);
        let parsed = branch().parse(&mut state).unwrap();
        assert_eq!(parsed.pattern, Pattern::var("x"));
        assert_eq!(parsed.body, Expression::IntLiteral(1));
    }

    #[test]
    fn test_branches_require_one() {
        let mut state = ParseState::new(vec![Token::new(TokenKind::CCurly)]);
        assert!(matches!(
            branches().parse(&mut state),
            Err(ParseError::InvalidToken { .. })
        ));
    }
}
