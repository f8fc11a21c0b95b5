//! Definition parsers for the Shotel language

use crate::ast::{Constructor, Definition, Expression, FnDefinition, TypeDefinition};
use crate::parser::combinators::{BoxedParser, expect, expect_text, many_while, separated1};
use crate::token::TokenKind;

use super::expression::expression;

/// Which identifier case a list of names is written in.
///
/// Constructor fields in a type definition name types and are `UID`s;
/// constructor fields in a pattern bind variables and are `LID`s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCase {
    Upper,
    Lower,
}

impl NameCase {
    pub fn token_kind(self) -> TokenKind {
        match self {
            NameCase::Upper => TokenKind::Uid,
            NameCase::Lower => TokenKind::Lid,
        }
    }
}

fn name(case: NameCase) -> BoxedParser<String> {
    expect_text(case.token_kind())
}

/// params := name*
pub fn params(case: NameCase) -> BoxedParser<Vec<String>> {
    let kind = case.token_kind();
    many_while(move |next| next == kind, name(case))
}

/// constructor := UID params
pub fn constructor(case: NameCase) -> BoxedParser<(String, Vec<String>)> {
    name(NameCase::Upper) + params(case)
}

/// fn_def := UID LID* "{" expression "}"
pub fn fn_def() -> BoxedParser<Definition> {
    name(NameCase::Upper) + params(NameCase::Lower) - expect(TokenKind::OCurly) + expression()
        - expect(TokenKind::CCurly)
        >> |((name, params), body): ((String, Vec<String>), Expression)| {
            Definition::Fn(FnDefinition::new(name, params, body))
        }
}

/// type_def := UID "=" constructor ("," constructor)*
pub fn type_def() -> BoxedParser<Definition> {
    let member = constructor(NameCase::Upper)
        >> |(name, field_types): (String, Vec<String>)| Constructor::new(name, field_types);

    name(NameCase::Upper) - expect(TokenKind::Assign) + separated1(member, TokenKind::Comma)
        >> |(name, constructors): (String, Vec<Constructor>)| {
            Definition::Type(TypeDefinition { name, constructors })
        }
}
