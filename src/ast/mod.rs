//! # Abstract Syntax Tree
//!
//! The parser produces a [`Program`], an ordered list of [`Definition`]s.
//! Definitions are either functions with a body expression or type
//! definitions listing their constructors:
//!
//! ```text
//! type Bool = True, False
//! fn Not b { case b | True => { False } | False => { True } }
//! ```
//!
//! Order is preserved for the two checking passes and for indexed access,
//! but definitions may refer to each other regardless of where they appear.

pub mod definition;
pub mod expression;
pub mod pattern;

use std::ops::Index;

pub use definition::{Constructor, Definition, FnDefinition, TypeDefinition};
pub use expression::{Apply, BinaryOp, BinaryOpKind, CaseOf, Expression, UnaryOp, UnaryOpKind};
pub use pattern::{Branch, Pattern};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub definitions: Vec<Definition>,
}

impl Program {
    pub fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Definition> {
        self.definitions.iter()
    }
}

impl Index<usize> for Program {
    type Output = Definition;

    fn index(&self, index: usize) -> &Self::Output {
        &self.definitions[index]
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Definition;
    type IntoIter = std::slice::Iter<'a, Definition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
