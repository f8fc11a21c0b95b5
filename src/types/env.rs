//! # Type Environment
//!
//! Lexical scopes mapping names to types. Scopes live in an arena and refer
//! to their parent by [`ScopeId`], so a child frame can be opened for every
//! function body and case branch without any ownership cycles.
//!
//! Binding only ever writes to the given frame; a name bound in a child
//! shadows the parent's binding without touching it.

use std::collections::HashMap;

use tracing::trace;

use super::ty::Type;
use crate::ast::{BinaryOpKind, UnaryOpKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

#[derive(Debug, Clone, Default)]
struct Scope {
    bindings: HashMap<String, Type>,
    parent: Option<ScopeId>,
}

#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// An environment holding a single, empty root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
        }
    }

    /// The root scope pre-seeded with the operator bindings.
    ///
    /// Every binary operator is `Int -> Int -> Int` and `NOT` is `Int -> Int`;
    /// operators are looked up by their kind name, e.g. `PLUS`.
    pub fn with_builtins() -> Self {
        let mut env = Environment::new();
        let root = env.root();
        let binary = Type::curried(&[Type::int(), Type::int()], Type::int());

        for kind in BinaryOpKind::ALL {
            env.bind(root, kind.name(), binary.clone());
        }
        for kind in UnaryOpKind::ALL {
            env.bind(root, kind.name(), Type::arrow(Type::int(), Type::int()));
        }

        env
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a child frame of `parent`.
    pub fn new_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent: Some(parent),
        });
        trace!(scope = id.0, parent = parent.0, "opened scope");
        id
    }

    /// Find the nearest binding of `name`, walking outward from `scope`.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> Option<&Type> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let frame = &self.scopes[id.0];
            if let Some(ty) = frame.bindings.get(name) {
                return Some(ty);
            }
            current = frame.parent;
        }
        None
    }

    pub fn bind(&mut self, scope: ScopeId, name: impl Into<String>, ty: Type) {
        self.scopes[scope.0].bindings.insert(name.into(), ty);
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_env() {
        let env = Environment::new();
        assert!(env.lookup(env.root(), "x").is_none());
    }

    #[test]
    fn test_bind_and_lookup() {
        let mut env = Environment::new();
        let root = env.root();
        env.bind(root, "x", Type::int());
        assert_eq!(env.lookup(root, "x"), Some(&Type::int()));
    }

    #[test]
    fn test_rebind_shadows_in_same_scope() {
        let mut env = Environment::new();
        let root = env.root();
        env.bind(root, "x", Type::int());
        env.bind(root, "x", Type::string());
        assert_eq!(env.lookup(root, "x"), Some(&Type::string()));
    }

    #[test]
    fn test_parent_lookup() {
        let mut env = Environment::new();
        let root = env.root();
        env.bind(root, "x", Type::int());
        let child = env.new_scope(root);
        assert_eq!(env.lookup(child, "x"), Some(&Type::int()));
    }

    #[test]
    fn test_child_shadows_parent_without_mutating_it() {
        let mut env = Environment::new();
        let root = env.root();
        env.bind(root, "x", Type::int());
        let child = env.new_scope(root);
        env.bind(child, "x", Type::string());

        assert_eq!(env.lookup(child, "x"), Some(&Type::string()));
        assert_eq!(env.lookup(root, "x"), Some(&Type::int()));
    }

    #[test]
    fn test_sibling_scopes_do_not_share_bindings() {
        let mut env = Environment::new();
        let root = env.root();
        let first = env.new_scope(root);
        let second = env.new_scope(root);
        env.bind(first, "a", Type::int());

        assert!(env.lookup(second, "a").is_none());
        assert!(env.lookup(root, "a").is_none());
        assert_eq!(env.lookup(first, "a"), Some(&Type::int()));
    }

    #[test]
    fn test_builtins_bind_operators() {
        let env = Environment::with_builtins();
        let root = env.root();
        assert_eq!(
            env.lookup(root, "PLUS").map(Type::to_string).as_deref(),
            Some("Int -> Int -> Int")
        );
        assert_eq!(
            env.lookup(root, "NOT").map(Type::to_string).as_deref(),
            Some("Int -> Int")
        );
        assert!(env.lookup(root, "NEQUALS").is_some());
    }
}
