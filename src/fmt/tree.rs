use std::fmt::{self, Display};

use crate::ast::{Branch, Expression, Pattern};

impl Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::IntLiteral(value) => write!(f, "{value}"),
            Expression::StringLiteral(text) => write!(f, "{text}"),
            Expression::LowerRef(name) | Expression::UpperRef(name) => write!(f, "{name}"),
            Expression::BinaryOp(op) => {
                write!(f, "{}({}, {})", op.kind.name(), op.left, op.right)
            }
            Expression::UnaryOp(op) => write!(f, "{}({})", op.kind.name(), op.operand),
            Expression::Apply(apply) => {
                write!(f, "APPLY({}, {})", apply.function, apply.argument)
            }
            Expression::CaseOf(case) => {
                write!(f, "CASE({}, [", case.scrutinee)?;
                for (i, branch) in case.branches.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{branch}")?;
                }
                write!(f, "])")
            }
        }
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.pattern, self.body)
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Var(name) => write!(f, "{name}"),
            Pattern::Constructor { name, params } => {
                write!(f, "{name}")?;
                for param in params {
                    write!(f, " {param}")?;
                }
                Ok(())
            }
        }
    }
}
