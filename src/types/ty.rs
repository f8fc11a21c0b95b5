use std::fmt;

pub const INT: &str = "Int";
pub const STRING: &str = "String";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVar {
    pub id: usize,
}

impl TypeVar {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl fmt::Display for TypeVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "'t{}", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Placeholder, unresolved until the type manager substitutes it.
    Var(TypeVar),
    /// Nominal type: a built-in such as `Int` or a user type definition.
    Base(String),
    Arrow(Box<Type>, Box<Type>),
}

impl Type {
    pub fn var(id: usize) -> Self {
        Type::Var(TypeVar::new(id))
    }

    pub fn base(name: impl Into<String>) -> Self {
        Type::Base(name.into())
    }

    pub fn int() -> Self {
        Type::base(INT)
    }

    pub fn string() -> Self {
        Type::base(STRING)
    }

    pub fn arrow(domain: Type, codomain: Type) -> Self {
        Type::Arrow(Box::new(domain), Box::new(codomain))
    }

    /// Builds `p1 -> p2 -> ... -> pn -> result`, or just `result` when there
    /// are no parameters.
    pub fn curried(params: &[Type], result: Type) -> Self {
        params
            .iter()
            .rev()
            .fold(result, |acc, param| Type::arrow(param.clone(), acc))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Type::Var(_))
    }

    pub fn pretty(&self) -> String {
        match self {
            Type::Base(name) => name.clone(),
            Type::Var(v) => v.to_string(),
            Type::Arrow(t1, t2) => {
                let t1_str = if matches!(**t1, Type::Arrow(_, _)) {
                    format!("({})", t1.pretty())
                } else {
                    t1.pretty()
                };
                format!("{} -> {}", t1_str, t2.pretty())
            }
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
