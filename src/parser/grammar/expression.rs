//! Expression parsers for the Shotel language
//!
//! Levels from loosest to tightest:
//!
//! ```text
//! comparison  := add (("==" | "!=") comparison)?
//! add         := mul (("+" | "-" | ">>" | "<<") add)?
//! mul         := or (("*" | "/" | "%") mul)?
//! or          := and ("or" or)?
//! and         := not_app (("and" | "xor") and)?
//! not_app     := "!" application | application
//! application := app_base app_base*
//! ```
//!
//! Every binary level recurses into itself on the right, so all binary
//! operators are right-associative. Application folds to the left.

use crate::ast::{BinaryOpKind, Branch, CaseOf, Expression, UnaryOpKind};
use crate::parser::combinators::{
    BoxedParser, expect, expect_int, expect_text, many_while, predict,
};
use crate::parser::state::{ParseState, Parser};
use crate::token::TokenKind;

use super::pattern::branches;

const COMPARISON_OPS: &[(TokenKind, BinaryOpKind)] = &[
    (TokenKind::Equal, BinaryOpKind::Equals),
    (TokenKind::NEqual, BinaryOpKind::NEquals),
];

const ADD_OPS: &[(TokenKind, BinaryOpKind)] = &[
    (TokenKind::Plus, BinaryOpKind::Plus),
    (TokenKind::Minus, BinaryOpKind::Minus),
    (TokenKind::RShift, BinaryOpKind::RShift),
    (TokenKind::LShift, BinaryOpKind::LShift),
];

const MUL_OPS: &[(TokenKind, BinaryOpKind)] = &[
    (TokenKind::Times, BinaryOpKind::Times),
    (TokenKind::Divide, BinaryOpKind::Divide),
    (TokenKind::Modulo, BinaryOpKind::Modulo),
];

const OR_OPS: &[(TokenKind, BinaryOpKind)] = &[(TokenKind::Or, BinaryOpKind::Or)];

const AND_OPS: &[(TokenKind, BinaryOpKind)] = &[
    (TokenKind::And, BinaryOpKind::And),
    (TokenKind::Xor, BinaryOpKind::Xor),
];

pub fn expression() -> BoxedParser<Expression> {
    comparison()
}

/// `operand (op level)?` for one of the right-associative binary levels.
fn right_assoc(
    operand: fn() -> BoxedParser<Expression>,
    level: fn() -> BoxedParser<Expression>,
    operators: &'static [(TokenKind, BinaryOpKind)],
) -> BoxedParser<Expression> {
    BoxedParser::new(move |state: &mut ParseState| {
        let left = operand().parse(state)?;

        let Some(kind) = state.peek_kind() else {
            return Ok(left);
        };
        let Some((_, op)) = operators.iter().find(|(token, _)| *token == kind) else {
            return Ok(left);
        };
        state.advance();

        let right = level().parse(state)?;
        Ok(Expression::binary(*op, left, right))
    })
}

pub fn comparison() -> BoxedParser<Expression> {
    right_assoc(add, comparison, COMPARISON_OPS)
}

fn add() -> BoxedParser<Expression> {
    right_assoc(mul, add, ADD_OPS)
}

fn mul() -> BoxedParser<Expression> {
    right_assoc(or, mul, MUL_OPS)
}

fn or() -> BoxedParser<Expression> {
    right_assoc(and, or, OR_OPS)
}

fn and() -> BoxedParser<Expression> {
    right_assoc(not_application, and, AND_OPS)
}

/// not_app := "!" application | application
fn not_application() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        if state.next_is(TokenKind::Not) {
            state.advance();
            let operand = application().parse(state)?;
            return Ok(Expression::unary(UnaryOpKind::Not, operand));
        }
        application().parse(state)
    })
}

fn starts_app_base(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Int
            | TokenKind::Literal
            | TokenKind::Lid
            | TokenKind::Uid
            | TokenKind::Case
            | TokenKind::OPar
    )
}

/// application := app_base app_base*
fn application() -> BoxedParser<Expression> {
    app_base() + many_while(starts_app_base, app_base())
        >> |(function, arguments): (Expression, Vec<Expression>)| {
            arguments.into_iter().fold(function, Expression::apply)
        }
}

/// app_base := INT | LITERAL | LID | UID | case | "(" expression ")"
fn app_base() -> BoxedParser<Expression> {
    predict("a function or a value", |kind| match kind {
        TokenKind::Int => Some(expect_int() >> Expression::IntLiteral),
        TokenKind::Literal => Some(expect_text(TokenKind::Literal) >> Expression::StringLiteral),
        TokenKind::Lid => Some(expect_text(TokenKind::Lid) >> Expression::LowerRef),
        TokenKind::Uid => Some(expect_text(TokenKind::Uid) >> Expression::UpperRef),
        TokenKind::Case => Some(case_of()),
        TokenKind::OPar => Some(expect(TokenKind::OPar) * expression() - expect(TokenKind::CPar)),
        _ => None,
    })
}

/// case := "case" comparison branch+
fn case_of() -> BoxedParser<Expression> {
    expect(TokenKind::Case) * comparison() + branches()
        >> |(scrutinee, branches): (Expression, Vec<Branch>)| {
            Expression::CaseOf(CaseOf {
                scrutinee: Box::new(scrutinee),
                branches,
            })
        }
}
