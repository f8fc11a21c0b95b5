pub mod check;
pub mod env;
pub mod error;
pub mod infer;
pub mod subst;
pub mod ty;
pub mod unify;

pub use check::{CheckOptions, Checker, DefinitionError, Signature, check_program};
pub use env::{Environment, ScopeId};
pub use error::{BindingError, TypeError};
pub use infer::Infer;
pub use subst::TypeManager;
pub use ty::{Type, TypeVar};
pub use unify::UnifyError;
