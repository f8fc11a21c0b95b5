//! # Shotel - A Small Functional Language Front End
//!
//! Shotel programs are sequences of function and algebraic type definitions.
//! This crate is the front end of the language: it turns the token records
//! produced by the external scanner into a syntax tree and infers a type for
//! every definition.
//!
//! ## Architecture Overview
//!
//! The pipeline consists of the following stages:
//!
//! 1. **Tokens** (`token`) - Decodes `KIND` / `KIND(payload)` records printed by the scanner
//! 2. **Parser** (`parser`) - Builds a [`ast::Program`] using combinator-based predictive descent
//! 3. **Type Checking** (`types`) - Two-pass unification-based inference over all definitions
//!
//! ## Pipeline Flow
//!
//! ```text
//! Scanner output (String)
//!     ↓
//! [Tokens] → Vec<token::Token>
//!     ↓
//! [Parser] → ast::Program
//!     ↓
//! [Type Checker] → ast::Program with parameter/return types, signatures
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Predictive Parsing
//! Each production chooses what to parse from the next token alone, so the
//! parser never backtracks. Binary operators are right-associative at every
//! precedence level; application by juxtaposition is left-associative.
//!
//! ### Operators as Environment Bindings
//! Operators are not special-cased by the checker. `a + b` is typed exactly
//! like applying the value bound to `PLUS` to `a` and `b`, so the built-in
//! prelude decides what each operator accepts.
//!
//! ### Two-Pass Checking
//! The first pass declares a signature made of fresh type variables for every
//! function and constructor; the second pass checks bodies against those
//! signatures. Definitions may therefore refer to themselves and to each
//! other in any order.
//!
//! ## Module Structure
//!
//! - [`token`] - Token kinds and record decoding
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`parser`] - Parsing using combinator-based grammar
//! - [`types`] - Type representation, unification and checking
//! - [`fmt`] - Tree notation and surface-syntax pretty printing
//!
//! ## Example Program
//!
//! ```text
//! type List = Cons Int List, Nil
//!
//! fn Length l {
//!   case l
//!     | Cons head tail => { 1 + Length tail }
//!     | Nil => { 0 }
//! }
//! ```
//!
//! Checking this program reports `Cons : 't0 -> List -> List`,
//! `Nil : List` and `Length : List -> Int`. The head field is never used, so
//! its type stays an unresolved variable.
//!
//! ## Getting Started
//!
//! To use this library:
//! 1. Decode scanner output with [`token::decode_records()`]
//! 2. Parse with [`parser::parse_tokens()`]
//! 3. Type check with [`types::Checker::check()`]

pub mod ast;
pub mod fmt;
pub mod parser;
pub mod token;
pub mod types;
