//! # Patterns
//!
//! Patterns appear on the left of case branches:
//!
//! ```text
//! case list
//!   | Cons head tail => { head }
//!   | other => { 0 }
//! ```
//!
//! - [`Pattern::Var`] always matches and binds the scrutinee to a name.
//! - [`Pattern::Constructor`] matches one data constructor and binds each of
//!   its fields to the listed lowercase names.
//!
//! Bindings made by a pattern are visible only in the body of its own
//! branch.

use super::expression::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Var(String),
    Constructor { name: String, params: Vec<String> },
}

impl Pattern {
    pub fn var(name: impl Into<String>) -> Self {
        Pattern::Var(name.into())
    }

    pub fn constructor<S: Into<String>>(name: impl Into<String>, params: Vec<S>) -> Self {
        Pattern::Constructor {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub pattern: Pattern,
    pub body: Expression,
}
