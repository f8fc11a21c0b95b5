use thiserror::Error;

use super::subst::TypeManager;
use super::ty::{Type, TypeVar};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnifyError {
    #[error("cannot unify {left} with {right}")]
    Mismatch { left: Type, right: Type },

    #[error("cannot construct infinite type {var} = {ty}")]
    OccursCheck { var: TypeVar, ty: Type },
}

impl TypeManager {
    /// Make `left` and `right` equal by extending the substitution.
    ///
    /// Both sides are resolved first. An unbound placeholder on either side
    /// (left checked first) is bound to the other side; two arrows unify
    /// their domains and then their codomains; two base types must carry the
    /// same name. Anything else is a [`UnifyError::Mismatch`] naming the two
    /// resolved types.
    ///
    /// ```text
    /// unify('t0, Int)                  => 't0 := Int
    /// unify('t0 -> 't1, Int -> String) => 't0 := Int, 't1 := String
    /// unify(Int, String)               => Mismatch
    /// unify(Int, Int -> Int)           => Mismatch
    /// ```
    ///
    /// Without the occurs check, `unify('t0, 't0 -> Int)` succeeds and leaves
    /// an infinite type behind.
    pub fn unify(&mut self, left: &Type, right: &Type) -> Result<(), UnifyError> {
        let (left, left_open) = self.resolve(left);
        let (right, right_open) = self.resolve(right);

        match (left, right) {
            (Type::Var(var), other) if left_open => self.bind_checked(var, other),
            (other, Type::Var(var)) if right_open => self.bind_checked(var, other),
            (Type::Arrow(left_domain, left_codomain), Type::Arrow(right_domain, right_codomain)) => {
                self.unify(&left_domain, &right_domain)?;
                self.unify(&left_codomain, &right_codomain)
            }
            (Type::Base(left), Type::Base(right)) if left == right => Ok(()),
            (left, right) => Err(UnifyError::Mismatch { left, right }),
        }
    }

    fn bind_checked(&mut self, var: TypeVar, ty: Type) -> Result<(), UnifyError> {
        if self.occurs_check && !ty.is_var() && self.occurs(&var, &ty) {
            return Err(UnifyError::OccursCheck { var, ty });
        }
        self.bind(&var, ty);
        Ok(())
    }
}
