use std::fmt;

use thiserror::Error;
use tracing::debug;

use super::env::Environment;
use super::error::TypeError;
use super::infer::Infer;
use super::subst::TypeManager;
use super::ty::Type;
use crate::ast::{Definition, Program};

/// Switches for a checking run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// Refuse to bind a variable to a type containing it.
    pub occurs_check: bool,
    /// Keep checking later definitions after one fails.
    pub keep_going: bool,
}

/// A [`TypeError`] tagged with the definition it was raised in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("in definition {definition}: {error}")]
pub struct DefinitionError {
    pub definition: String,
    #[source]
    pub error: TypeError,
}

impl DefinitionError {
    pub fn kind(&self) -> &'static str {
        self.error.kind()
    }
}

/// The resolved type of a top-level name after checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub ty: Type,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.name, self.ty)
    }
}

/// Check every definition of `program` in two passes, stopping at the first
/// error.
///
/// `env` is usually [`Environment::with_builtins`]; signatures are declared
/// in its root scope and remain there afterwards.
pub fn check_program(
    program: &mut Program,
    env: &mut Environment,
    types: &mut TypeManager,
) -> Result<(), TypeError> {
    let mut infer = Infer::new(types, env);

    for definition in program.definitions.iter_mut() {
        infer.typecheck_first_pass(definition);
    }
    for definition in program.definitions.iter() {
        infer.typecheck_second_pass(definition)?;
    }

    Ok(())
}

/// Owns the state of a checking run and reports its outcome.
#[derive(Debug, Clone)]
pub struct Checker {
    options: CheckOptions,
    types: TypeManager,
    env: Environment,
}

impl Checker {
    pub fn new(options: CheckOptions) -> Self {
        Checker {
            options,
            types: TypeManager::new().with_occurs_check(options.occurs_check),
            env: Environment::with_builtins(),
        }
    }

    pub fn types(&self) -> &TypeManager {
        &self.types
    }

    /// Run both passes over `program`.
    ///
    /// Without `keep_going` the first failing definition ends the run and is
    /// the only error returned.
    pub fn check(&mut self, program: &mut Program) -> Result<(), Vec<DefinitionError>> {
        let mut infer = Infer::new(&mut self.types, &mut self.env);
        let mut errors = Vec::new();

        for definition in program.definitions.iter_mut() {
            infer.typecheck_first_pass(definition);
        }

        for definition in program.definitions.iter() {
            if let Err(error) = infer.typecheck_second_pass(definition) {
                debug!(definition = definition.name(), %error, "definition failed");
                errors.push(DefinitionError {
                    definition: definition.name().to_string(),
                    error,
                });
                if !self.options.keep_going {
                    break;
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Current resolved type of a top-level name.
    pub fn type_of(&self, name: &str) -> Option<Type> {
        self.env
            .lookup(self.env.root(), name)
            .map(|ty| self.types.zonk(ty))
    }

    /// One signature per function and per constructor, in program order.
    ///
    /// Built from the types the first pass recorded on each definition, so a
    /// function and a constructor sharing a name keep their own signatures.
    /// Definitions the first pass never saw are skipped.
    pub fn signatures(&self, program: &Program) -> Vec<Signature> {
        let declared = program.iter().flat_map(|definition| match definition {
            Definition::Fn(function) => {
                let ty = function
                    .return_type
                    .as_ref()
                    .map(|result| Type::curried(&function.param_types, result.clone()));
                vec![(function.name.as_str(), ty)]
            }
            Definition::Type(ty) => ty
                .constructors
                .iter()
                .map(|constructor| (constructor.name.as_str(), constructor.signature.clone()))
                .collect(),
        });

        declared
            .filter_map(|(name, ty)| {
                ty.map(|ty| Signature {
                    name: name.to_string(),
                    ty: self.types.zonk(&ty),
                })
            })
            .collect()
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(CheckOptions::default())
    }
}
