//! # Type Error Definitions
//!
//! Errors raised while checking a parsed program:
//!
//! - A name is referenced that no scope binds (`VariableUndefined`)
//! - A constructor pattern names an unknown constructor (`UndefinedType`)
//! - Unification or a structural requirement fails (`TypeBinding`)
//! - Pass 2 meets a function pass 1 never declared (`NotDeclared`)
//!
//! ## Error Reporting
//!
//! Types inside errors are fully resolved through the substitution at the
//! moment the error is raised, so messages show `Int -> String` instead of a
//! chain of placeholders.
//!
//! ## Related Modules
//!
//! - [`crate::types::infer`] - Expression typing that produces these errors
//! - [`crate::types::unify`] - Unification errors converted to `TypeError`
//! - [`crate::types::check`] - Tags errors with the failing definition

use thiserror::Error;

use super::subst::TypeManager;
use super::ty::{Type, TypeVar};
use super::unify::UnifyError;

/// Type error encountered while checking a definition.
///
/// # Example Error Messages
///
/// ```text
/// undefined variable: x
/// undefined constructor: Cons
/// type binding failed: cannot unify Int with String
/// function Main was not declared before its body was checked
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// Reference to a name no enclosing scope binds.
    #[error("undefined variable: {name}")]
    VariableUndefined { name: String },

    /// Constructor pattern naming a constructor that was never declared.
    #[error("undefined constructor: {name}")]
    UndefinedType { name: String },

    #[error("type binding failed: {0}")]
    TypeBinding(#[from] BindingError),

    #[error("function {name} was not declared before its body was checked")]
    NotDeclared { name: String },
}

/// Reasons a type binding could not be established.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("cannot unify {left} with {right}")]
    Mismatch { left: Type, right: Type },

    #[error("cannot construct infinite type {var} = {ty}")]
    InfiniteType { var: TypeVar, ty: Type },

    /// Operator kind without a binding in the environment.
    #[error("no type bound for operator {operator}")]
    UnboundOperator { operator: String },

    /// Constructor whose arrow chain does not end in a nominal type.
    #[error("constructor {constructor} does not produce a nominal type (got {ty})")]
    NotNominal { constructor: String, ty: Type },

    /// Pattern listing more fields than the constructor has.
    #[error("too many fields in pattern for constructor {constructor} : {ty}")]
    TooManyFields { constructor: String, ty: Type },
}

impl TypeError {
    /// Name of the error kind as reported to users.
    pub fn kind(&self) -> &'static str {
        match self {
            TypeError::VariableUndefined { .. } => "VariableUndefinedError",
            TypeError::UndefinedType { .. } => "UndefinedTypeError",
            TypeError::TypeBinding(_) => "TypeBindingError",
            TypeError::NotDeclared { .. } => "NotDeclaredError",
        }
    }

    /// Convert a unification failure, resolving the involved types through
    /// `types` for the message.
    pub fn from_unify_error(err: UnifyError, types: &TypeManager) -> Self {
        let binding = match err {
            UnifyError::Mismatch { left, right } => BindingError::Mismatch {
                left: types.zonk(&left),
                right: types.zonk(&right),
            },
            UnifyError::OccursCheck { var, ty } => BindingError::InfiniteType {
                var,
                ty: types.zonk(&ty),
            },
        };
        TypeError::TypeBinding(binding)
    }
}
