use super::pattern::Branch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    IntLiteral(i128),
    StringLiteral(String),
    /// Reference to a lowercase name: a parameter or pattern binding.
    LowerRef(String),
    /// Reference to an uppercase name: a function or constructor.
    UpperRef(String),
    BinaryOp(BinaryOp),
    UnaryOp(UnaryOp),
    Apply(Apply),
    CaseOf(CaseOf),
}

impl Expression {
    pub fn lower(name: impl Into<String>) -> Self {
        Expression::LowerRef(name.into())
    }

    pub fn upper(name: impl Into<String>) -> Self {
        Expression::UpperRef(name.into())
    }

    pub fn binary(kind: BinaryOpKind, left: Expression, right: Expression) -> Self {
        Expression::BinaryOp(BinaryOp {
            kind,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn unary(kind: UnaryOpKind, operand: Expression) -> Self {
        Expression::UnaryOp(UnaryOp {
            kind,
            operand: Box::new(operand),
        })
    }

    pub fn apply(function: Expression, argument: Expression) -> Self {
        Expression::Apply(Apply {
            function: Box::new(function),
            argument: Box::new(argument),
        })
    }
}

/// Binary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOpKind {
    Plus,
    Minus,
    Times,
    Divide,
    Modulo,
    RShift,
    LShift,
    And,
    Or,
    Xor,
    Equals,
    NEquals,
}

impl BinaryOpKind {
    pub const ALL: [BinaryOpKind; 12] = [
        BinaryOpKind::Plus,
        BinaryOpKind::Minus,
        BinaryOpKind::Times,
        BinaryOpKind::Divide,
        BinaryOpKind::Modulo,
        BinaryOpKind::RShift,
        BinaryOpKind::LShift,
        BinaryOpKind::And,
        BinaryOpKind::Or,
        BinaryOpKind::Xor,
        BinaryOpKind::Equals,
        BinaryOpKind::NEquals,
    ];

    /// Name under which the operator's type is bound in the environment.
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOpKind::Plus => "PLUS",
            BinaryOpKind::Minus => "MINUS",
            BinaryOpKind::Times => "TIMES",
            BinaryOpKind::Divide => "DIVIDE",
            BinaryOpKind::Modulo => "MODULO",
            BinaryOpKind::RShift => "RSHIFT",
            BinaryOpKind::LShift => "LSHIFT",
            BinaryOpKind::And => "AND",
            BinaryOpKind::Or => "OR",
            BinaryOpKind::Xor => "XOR",
            BinaryOpKind::Equals => "EQUALS",
            BinaryOpKind::NEquals => "NEQUALS",
        }
    }
}

/// Unary operator kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOpKind {
    Not,
}

impl UnaryOpKind {
    pub const ALL: [UnaryOpKind; 1] = [UnaryOpKind::Not];

    pub fn name(&self) -> &'static str {
        match self {
            UnaryOpKind::Not => "NOT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp {
    pub kind: BinaryOpKind,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOp {
    pub kind: UnaryOpKind,
    pub operand: Box<Expression>,
}

/// Function application by juxtaposition: `f a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apply {
    pub function: Box<Expression>,
    pub argument: Box<Expression>,
}

/// `case scrutinee | pattern => { body } ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOf {
    pub scrutinee: Box<Expression>,
    pub branches: Vec<Branch>,
}
