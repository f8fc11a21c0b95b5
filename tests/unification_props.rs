use proptest::prelude::*;
use shotel::types::{Type, TypeManager, TypeVar};

fn var_of(ty: &Type) -> TypeVar {
    match ty {
        Type::Var(v) => v.clone(),
        other => panic!("expected a type variable, got {other}"),
    }
}

fn base_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,4}"
}

proptest! {
    #[test]
    fn fresh_variables_are_distinct(count in 1usize..200) {
        let mut types = TypeManager::new();
        let vars: Vec<Type> = (0..count).map(|_| types.fresh()).collect();

        for (i, var) in vars.iter().enumerate() {
            prop_assert_eq!(var, &Type::var(i));
        }
        prop_assert_eq!(types.allocated(), count);
    }

    #[test]
    fn resolve_follows_a_chain_to_its_end(length in 1usize..64) {
        let mut types = TypeManager::new();
        let vars: Vec<Type> = (0..length).map(|_| types.fresh()).collect();
        for pair in vars.windows(2) {
            types.bind(&var_of(&pair[1]), pair[0].clone());
        }

        let last = &vars[length - 1];
        prop_assert_eq!(types.resolve(last), (vars[0].clone(), true));

        types.bind(&var_of(&vars[0]), Type::int());
        prop_assert_eq!(types.resolve(last), (Type::int(), false));
        prop_assert_eq!(types.zonk(&Type::arrow(last.clone(), last.clone())).to_string(), "Int -> Int");
    }

    #[test]
    fn base_types_unify_only_with_themselves(left in base_name(), right in base_name()) {
        let mut types = TypeManager::new();
        let same = left == right;

        prop_assert_eq!(types.unify(&Type::base(left.clone()), &Type::base(right.clone())).is_ok(), same);
        prop_assert_eq!(types.unify(&Type::base(right), &Type::base(left)).is_ok(), same);
    }

    #[test]
    fn unified_curried_types_agree(params in prop::collection::vec(base_name(), 0..8), result in base_name()) {
        let mut types = TypeManager::new();
        let concrete = Type::curried(
            &params.iter().map(Type::base).collect::<Vec<_>>(),
            Type::base(result),
        );
        let placeholders: Vec<Type> = params.iter().map(|_| types.fresh()).collect();
        let result_var = types.fresh();
        let open = Type::curried(&placeholders, result_var);

        prop_assert!(types.unify(&open, &concrete).is_ok());
        prop_assert_eq!(types.zonk(&open), concrete.clone());
        prop_assert!(types.unify(&concrete, &open).is_ok());
    }
}
