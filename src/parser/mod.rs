//! # Parser
//!
//! Predictive recursive-descent parser over the decoded token stream.
//! Every production decides what to parse from the next token alone, so the
//! parser never backtracks and reports the first token that does not fit.

mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};
