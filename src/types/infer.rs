//! # Type Inference
//!
//! Checking runs in two passes over the definitions of a program:
//!
//! 1. [`Infer::typecheck_first_pass`] declares a signature for every
//!    definition. Functions get fresh variables for their return type and
//!    each parameter; constructors get a fresh variable per field ending in
//!    the nominal type they construct.
//! 2. [`Infer::typecheck_second_pass`] checks each function body against the
//!    signature declared for it.
//!
//! Because every signature exists before any body is checked, definitions
//! may refer to themselves and to each other in any order.
//!
//! ## Expression Rules
//!
//! ```text
//! 12                  : Int
//! "abc"               : String
//! x / Foo             : looked up in scope
//! l + r               : unify(l -> r -> 'res, type of PLUS)
//! !x                  : unify(x -> 'res, type of NOT)
//! f a                 : unify(a -> 'res, f)
//! case s | p => { b } : every branch body unified with one 'res
//! ```

use tracing::debug;

use super::env::{Environment, ScopeId};
use super::error::{BindingError, TypeError};
use super::subst::TypeManager;
use super::ty::Type;
use crate::ast::{Definition, Expression, Pattern};

pub struct Infer<'a> {
    types: &'a mut TypeManager,
    env: &'a mut Environment,
    scope: ScopeId,
}

impl<'a> Infer<'a> {
    /// Infer in the root scope of `env`.
    pub fn new(types: &'a mut TypeManager, env: &'a mut Environment) -> Self {
        let scope = env.root();
        Infer { types, env, scope }
    }

    /// Declare the signature of `definition` in the outer scope.
    pub fn typecheck_first_pass(&mut self, definition: &mut Definition) {
        match definition {
            Definition::Fn(function) => {
                let return_type = self.types.fresh();
                let param_types: Vec<Type> =
                    function.params.iter().map(|_| self.types.fresh()).collect();

                let signature = Type::curried(&param_types, return_type.clone());
                debug!(name = %function.name, ty = %signature, "declared function");
                self.env.bind(self.scope, function.name.clone(), signature);

                function.return_type = Some(return_type);
                function.param_types = param_types;
            }
            Definition::Type(ty) => {
                let nominal = Type::base(ty.name.clone());
                for constructor in ty.constructors.iter_mut() {
                    let fields: Vec<Type> = constructor
                        .field_types
                        .iter()
                        .map(|_| self.types.fresh())
                        .collect();

                    let signature = Type::curried(&fields, nominal.clone());
                    debug!(name = %constructor.name, ty = %signature, "declared constructor");
                    self.env
                        .bind(self.scope, constructor.name.clone(), signature.clone());
                    constructor.signature = Some(signature);
                }
            }
        }
    }

    /// Check the body of `definition` against its declared signature.
    pub fn typecheck_second_pass(&mut self, definition: &Definition) -> Result<(), TypeError> {
        let Definition::Fn(function) = definition else {
            return Ok(());
        };

        let Some(return_type) = &function.return_type else {
            return Err(TypeError::NotDeclared {
                name: function.name.clone(),
            });
        };
        if function.param_types.len() != function.params.len() {
            return Err(TypeError::NotDeclared {
                name: function.name.clone(),
            });
        }

        debug!(name = %function.name, "checking function body");

        let body_scope = self.env.new_scope(self.scope);
        for (param, ty) in function.params.iter().zip(&function.param_types) {
            self.env.bind(body_scope, param.clone(), ty.clone());
        }

        let body = self.infer_expr(body_scope, &function.body)?;
        self.unify(&body, return_type)
    }

    pub fn infer_expr(&mut self, scope: ScopeId, expr: &Expression) -> Result<Type, TypeError> {
        match expr {
            Expression::IntLiteral(_) => Ok(Type::int()),

            Expression::StringLiteral(_) => Ok(Type::string()),

            Expression::LowerRef(name) | Expression::UpperRef(name) => self
                .env
                .lookup(scope, name)
                .cloned()
                .ok_or_else(|| TypeError::VariableUndefined { name: name.clone() }),

            Expression::BinaryOp(op) => {
                let left = self.infer_expr(scope, &op.left)?;
                let right = self.infer_expr(scope, &op.right)?;
                let operator = self.operator(scope, op.kind.name())?;

                let result = self.types.fresh();
                let expected = Type::arrow(left, Type::arrow(right, result.clone()));
                self.unify(&expected, &operator)?;
                Ok(result)
            }

            Expression::UnaryOp(op) => {
                let operand = self.infer_expr(scope, &op.operand)?;
                let operator = self.operator(scope, op.kind.name())?;

                let result = self.types.fresh();
                self.unify(&Type::arrow(operand, result.clone()), &operator)?;
                Ok(result)
            }

            Expression::Apply(apply) => {
                let function = self.infer_expr(scope, &apply.function)?;
                let argument = self.infer_expr(scope, &apply.argument)?;

                let result = self.types.fresh();
                self.unify(&Type::arrow(argument, result.clone()), &function)?;
                Ok(result)
            }

            Expression::CaseOf(case) => {
                let scrutinee = self.infer_expr(scope, &case.scrutinee)?;
                let result = self.types.fresh();

                for branch in &case.branches {
                    let branch_scope = self.env.new_scope(scope);
                    self.match_pattern(branch_scope, &branch.pattern, &scrutinee)?;
                    let body = self.infer_expr(branch_scope, &branch.body)?;
                    self.unify(&result, &body)?;
                }

                Ok(result)
            }
        }
    }

    /// Bind the names introduced by `pattern` in `scope`, constraining the
    /// scrutinee's type where the pattern names a constructor.
    pub fn match_pattern(
        &mut self,
        scope: ScopeId,
        pattern: &Pattern,
        scrutinee: &Type,
    ) -> Result<(), TypeError> {
        match pattern {
            Pattern::Var(name) => {
                self.env.bind(scope, name.clone(), scrutinee.clone());
                Ok(())
            }
            Pattern::Constructor { name, params } => {
                let constructor = self
                    .env
                    .lookup(scope, name)
                    .cloned()
                    .ok_or_else(|| TypeError::UndefinedType { name: name.clone() })?;

                // Walk the declared shape, not its current resolution: a name
                // declared as a bare variable is never a constructor, however
                // far checking has got.
                let mut current = &constructor;
                for param in params {
                    let Type::Arrow(domain, codomain) = current else {
                        return Err(BindingError::TooManyFields {
                            constructor: name.clone(),
                            ty: self.types.zonk(&constructor),
                        }
                        .into());
                    };
                    self.env.bind(scope, param.clone(), (**domain).clone());
                    current = codomain;
                }

                if !matches!(current, Type::Base(_)) {
                    return Err(BindingError::NotNominal {
                        constructor: name.clone(),
                        ty: self.types.zonk(current),
                    }
                    .into());
                }

                self.unify(current, scrutinee)
            }
        }
    }

    fn operator(&self, scope: ScopeId, name: &str) -> Result<Type, TypeError> {
        self.env.lookup(scope, name).cloned().ok_or_else(|| {
            BindingError::UnboundOperator {
                operator: name.to_string(),
            }
            .into()
        })
    }

    fn unify(&mut self, left: &Type, right: &Type) -> Result<(), TypeError> {
        match self.types.unify(left, right) {
            Ok(()) => Ok(()),
            Err(err) => Err(TypeError::from_unify_error(err, self.types)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{
        BinaryOpKind, Branch, CaseOf, Constructor, FnDefinition, TypeDefinition, UnaryOpKind,
    };

    fn type_def(name: &str, constructors: Vec<Constructor>) -> Definition {
        Definition::Type(TypeDefinition {
            name: name.to_string(),
            constructors,
        })
    }

    fn case_of(scrutinee: Expression, branches: Vec<(Pattern, Expression)>) -> Expression {
        Expression::CaseOf(CaseOf {
            scrutinee: Box::new(scrutinee),
            branches: branches
                .into_iter()
                .map(|(pattern, body)| Branch { pattern, body })
                .collect(),
        })
    }

    fn check(definitions: &mut [Definition]) -> (TypeManager, Result<(), TypeError>) {
        let mut types = TypeManager::new();
        let mut env = Environment::with_builtins();
        let result = {
            let mut infer = Infer::new(&mut types, &mut env);
            for def in definitions.iter_mut() {
                infer.typecheck_first_pass(def);
            }
            definitions
                .iter()
                .try_for_each(|def| infer.typecheck_second_pass(def))
        };
        (types, result)
    }

    fn return_type(types: &TypeManager, def: &Definition) -> Type {
        match def {
            Definition::Fn(function) => types.zonk(function.return_type.as_ref().unwrap()),
            other => panic!("expected a function, got {other:?}"),
        }
    }

    #[test]
    fn test_first_pass_allocates_return_before_params() {
        let mut types = TypeManager::new();
        let mut env = Environment::new();
        let mut def = Definition::Fn(FnDefinition::new(
            "Add",
            vec!["a", "b"],
            Expression::IntLiteral(0),
        ));

        Infer::new(&mut types, &mut env).typecheck_first_pass(&mut def);

        let Definition::Fn(function) = &def else {
            unreachable!()
        };
        assert_eq!(function.return_type, Some(Type::var(0)));
        assert_eq!(function.param_types, vec![Type::var(1), Type::var(2)]);
        assert_eq!(
            env.lookup(env.root(), "Add").unwrap().to_string(),
            "'t1 -> 't2 -> 't0"
        );
    }

    #[test]
    fn test_first_pass_declares_constructors() {
        let mut types = TypeManager::new();
        let mut env = Environment::new();
        let mut def = type_def(
            "List",
            vec![
                Constructor::new("Cons", vec!["Int", "List"]),
                Constructor::new::<&str>("Nil", vec![]),
            ],
        );

        Infer::new(&mut types, &mut env).typecheck_first_pass(&mut def);

        let root = env.root();
        assert_eq!(
            env.lookup(root, "Cons").unwrap().to_string(),
            "'t0 -> 't1 -> List"
        );
        assert_eq!(env.lookup(root, "Nil"), Some(&Type::base("List")));
    }

    #[test]
    fn test_literal_body() {
        let mut defs = vec![Definition::Fn(FnDefinition::new::<&str>(
            "Test",
            vec![],
            Expression::IntLiteral(12),
        ))];
        let (types, result) = check(&mut defs);
        assert_eq!(result, Ok(()));
        assert_eq!(return_type(&types, &defs[0]), Type::int());
    }

    #[test]
    fn test_string_literal_body() {
        let mut defs = vec![Definition::Fn(FnDefinition::new::<&str>(
            "Greeting",
            vec![],
            Expression::StringLiteral("hello".into()),
        ))];
        let (types, result) = check(&mut defs);
        assert_eq!(result, Ok(()));
        assert_eq!(return_type(&types, &defs[0]), Type::string());
    }

    #[test]
    fn test_self_recursion() {
        // fn Loop n { Loop (n - 1) }
        let body = Expression::apply(
            Expression::upper("Loop"),
            Expression::binary(
                BinaryOpKind::Minus,
                Expression::lower("n"),
                Expression::IntLiteral(1),
            ),
        );
        let mut defs = vec![Definition::Fn(FnDefinition::new("Loop", vec!["n"], body))];
        let (types, result) = check(&mut defs);
        assert_eq!(result, Ok(()));

        let Definition::Fn(function) = &defs[0] else {
            unreachable!()
        };
        assert_eq!(types.zonk(&function.param_types[0]), Type::int());
    }

    #[test]
    fn test_unary_operator() {
        let body = Expression::unary(UnaryOpKind::Not, Expression::lower("x"));
        let mut defs = vec![Definition::Fn(FnDefinition::new("Flip", vec!["x"], body))];
        let (types, result) = check(&mut defs);
        assert_eq!(result, Ok(()));
        assert_eq!(return_type(&types, &defs[0]), Type::int());
    }

    #[test]
    fn test_operator_rejects_string() {
        let body = Expression::binary(
            BinaryOpKind::Plus,
            Expression::IntLiteral(1),
            Expression::StringLiteral("one".into()),
        );
        let mut defs = vec![Definition::Fn(FnDefinition::new::<&str>(
            "Bad",
            vec![],
            body,
        ))];
        let (_, result) = check(&mut defs);
        assert!(matches!(
            result,
            Err(TypeError::TypeBinding(BindingError::Mismatch { .. }))
        ));
    }

    #[test]
    fn test_missing_operator_binding() {
        let mut types = TypeManager::new();
        let mut env = Environment::new();
        let root = env.root();
        let expr = Expression::binary(
            BinaryOpKind::Xor,
            Expression::IntLiteral(1),
            Expression::IntLiteral(2),
        );

        let result = Infer::new(&mut types, &mut env).infer_expr(root, &expr);
        assert_eq!(
            result,
            Err(TypeError::TypeBinding(BindingError::UnboundOperator {
                operator: "XOR".into()
            }))
        );
    }

    #[test]
    fn test_second_pass_without_first_pass() {
        let mut types = TypeManager::new();
        let mut env = Environment::with_builtins();
        let def = Definition::Fn(FnDefinition::new::<&str>(
            "Main",
            vec![],
            Expression::IntLiteral(0),
        ));

        let result = Infer::new(&mut types, &mut env).typecheck_second_pass(&def);
        assert_eq!(
            result,
            Err(TypeError::NotDeclared {
                name: "Main".into()
            })
        );
    }

    #[test]
    fn test_case_branches_must_agree() {
        let body = case_of(
            Expression::lower("x"),
            vec![
                (Pattern::var("a"), Expression::IntLiteral(1)),
                (Pattern::var("b"), Expression::StringLiteral("two".into())),
            ],
        );
        let mut defs = vec![Definition::Fn(FnDefinition::new("Pick", vec!["x"], body))];
        let (_, result) = check(&mut defs);
        assert!(matches!(result, Err(TypeError::TypeBinding(_))));
    }

    #[test]
    fn test_branch_bindings_do_not_leak() {
        let body = case_of(
            Expression::lower("x"),
            vec![
                (Pattern::var("first"), Expression::lower("first")),
                (Pattern::var("second"), Expression::lower("first")),
            ],
        );
        let mut defs = vec![Definition::Fn(FnDefinition::new("Pick", vec!["x"], body))];
        let (_, result) = check(&mut defs);
        assert_eq!(
            result,
            Err(TypeError::VariableUndefined {
                name: "first".into()
            })
        );
    }

    #[test]
    fn test_constructor_pattern_binds_fields() {
        // fn Head l { case l | Cons h t => { h + 1 } | Nil => { 0 } }
        let body = case_of(
            Expression::lower("l"),
            vec![
                (
                    Pattern::constructor("Cons", vec!["h", "t"]),
                    Expression::binary(
                        BinaryOpKind::Plus,
                        Expression::lower("h"),
                        Expression::IntLiteral(1),
                    ),
                ),
                (
                    Pattern::constructor::<&str>("Nil", vec![]),
                    Expression::IntLiteral(0),
                ),
            ],
        );
        let mut defs = vec![
            type_def(
                "List",
                vec![
                    Constructor::new("Cons", vec!["Int", "List"]),
                    Constructor::new::<&str>("Nil", vec![]),
                ],
            ),
            Definition::Fn(FnDefinition::new("Head", vec!["l"], body)),
        ];
        let (types, result) = check(&mut defs);
        assert_eq!(result, Ok(()));

        let Definition::Fn(function) = &defs[1] else {
            unreachable!()
        };
        assert_eq!(types.zonk(&function.param_types[0]), Type::base("List"));
        assert_eq!(return_type(&types, &defs[1]), Type::int());
    }

    #[test]
    fn test_undefined_constructor_pattern() {
        let body = case_of(
            Expression::lower("x"),
            vec![(
                Pattern::constructor::<&str>("Missing", vec![]),
                Expression::IntLiteral(0),
            )],
        );
        let mut defs = vec![Definition::Fn(FnDefinition::new("F", vec!["x"], body))];
        let (_, result) = check(&mut defs);
        assert_eq!(
            result,
            Err(TypeError::UndefinedType {
                name: "Missing".into()
            })
        );
    }

    #[test]
    fn test_constructor_pattern_with_too_many_fields() {
        let body = case_of(
            Expression::lower("x"),
            vec![(
                Pattern::constructor("True", vec!["extra"]),
                Expression::IntLiteral(0),
            )],
        );
        let mut defs = vec![
            type_def(
                "Bool",
                vec![
                    Constructor::new::<&str>("True", vec![]),
                    Constructor::new::<&str>("False", vec![]),
                ],
            ),
            Definition::Fn(FnDefinition::new("F", vec!["x"], body)),
        ];
        let (_, result) = check(&mut defs);
        assert!(matches!(
            result,
            Err(TypeError::TypeBinding(BindingError::TooManyFields { .. }))
        ));
    }

    #[test]
    fn test_constructor_pattern_with_missing_fields() {
        let body = case_of(
            Expression::lower("x"),
            vec![(
                Pattern::constructor::<&str>("Wrap", vec![]),
                Expression::IntLiteral(0),
            )],
        );
        let mut defs = vec![
            type_def("Box", vec![Constructor::new("Wrap", vec!["Int"])]),
            Definition::Fn(FnDefinition::new("F", vec!["x"], body)),
        ];
        let (_, result) = check(&mut defs);
        assert!(matches!(
            result,
            Err(TypeError::TypeBinding(BindingError::NotNominal { .. }))
        ));
    }
}
