use std::collections::HashMap;

use tracing::trace;

use super::ty::{Type, TypeVar};

/// Allocates type variables and owns the substitution map they resolve
/// through.
///
/// Following the map from any variable must end at an unbound variable or a
/// non-variable type. [`TypeManager::bind`] refuses the trivial `v -> v`
/// binding; longer cycles through arrows are only ruled out when the occurs
/// check is enabled.
#[derive(Debug, Clone, Default)]
pub struct TypeManager {
    counter: usize,
    bindings: HashMap<TypeVar, Type>,
    pub(super) occurs_check: bool,
}

impl TypeManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_occurs_check(mut self, enabled: bool) -> Self {
        self.occurs_check = enabled;
        self
    }

    /// A new placeholder, distinct from every variable handed out before.
    pub fn fresh(&mut self) -> Type {
        let id = self.counter;
        self.counter += 1;
        Type::Var(TypeVar::new(id))
    }

    /// Number of variables allocated so far.
    pub fn allocated(&self) -> usize {
        self.counter
    }

    pub fn binding(&self, var: &TypeVar) -> Option<&Type> {
        self.bindings.get(var)
    }

    pub fn bind(&mut self, var: &TypeVar, ty: Type) {
        if let Type::Var(target) = &ty
            && target == var
        {
            return;
        }
        trace!(var = %var, ty = %ty, "bind");
        self.bindings.insert(var.clone(), ty);
    }

    /// Follow the substitution chain from `ty`.
    ///
    /// Returns the last type reached and whether it is an unbound
    /// placeholder. Non-variable types are returned as they are.
    pub fn resolve(&self, ty: &Type) -> (Type, bool) {
        let mut current = ty;
        while let Type::Var(var) = current {
            match self.bindings.get(var) {
                Some(next) => current = next,
                None => return (current.clone(), true),
            }
        }
        (current.clone(), false)
    }

    /// Resolve `ty` all the way down, including inside arrows.
    ///
    /// A variable met again while it is being expanded stays unresolved, so
    /// this terminates on infinite types too.
    pub fn zonk(&self, ty: &Type) -> Type {
        self.zonk_guarded(ty, &mut Vec::new())
    }

    fn zonk_guarded(&self, ty: &Type, expanding: &mut Vec<TypeVar>) -> Type {
        match ty {
            Type::Base(_) => ty.clone(),
            Type::Var(var) => match self.bindings.get(var) {
                Some(bound) if !expanding.contains(var) => {
                    expanding.push(var.clone());
                    let resolved = self.zonk_guarded(bound, expanding);
                    expanding.pop();
                    resolved
                }
                _ => ty.clone(),
            },
            Type::Arrow(domain, codomain) => Type::arrow(
                self.zonk_guarded(domain, expanding),
                self.zonk_guarded(codomain, expanding),
            ),
        }
    }

    /// Whether `var` appears in `ty` once every bound variable is followed.
    pub fn occurs(&self, var: &TypeVar, ty: &Type) -> bool {
        match self.resolve(ty).0 {
            Type::Var(other) => &other == var,
            Type::Base(_) => false,
            Type::Arrow(domain, codomain) => {
                self.occurs(var, &domain) || self.occurs(var, &codomain)
            }
        }
    }
}
