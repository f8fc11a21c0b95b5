use super::expression::Expression;
use crate::types::Type;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Definition {
    Fn(FnDefinition),
    Type(TypeDefinition),
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Definition::Fn(function) => &function.name,
            Definition::Type(ty) => &ty.name,
        }
    }
}

/// `fn Name p1 p2 { body }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnDefinition {
    pub name: String,
    pub params: Vec<String>,
    pub body: Expression,
    /// Assigned by the first checking pass.
    pub return_type: Option<Type>,
    /// Assigned by the first checking pass, one per parameter.
    pub param_types: Vec<Type>,
}

impl FnDefinition {
    pub fn new<S: Into<String>>(name: impl Into<String>, params: Vec<S>, body: Expression) -> Self {
        FnDefinition {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
            body,
            return_type: None,
            param_types: Vec::new(),
        }
    }
}

/// `type Name = Ctor Field Field, Ctor`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDefinition {
    pub name: String,
    pub constructors: Vec<Constructor>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    /// Names of the field types, in declaration order.
    pub field_types: Vec<String>,
    /// Assigned by the first checking pass.
    pub signature: Option<Type>,
}

impl Constructor {
    pub fn new<S: Into<String>>(name: impl Into<String>, field_types: Vec<S>) -> Self {
        Constructor {
            name: name.into(),
            field_types: field_types.into_iter().map(Into::into).collect(),
            signature: None,
        }
    }
}
