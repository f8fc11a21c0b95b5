//! Pretty printer for Shotel source code
//!
//! Display implementations for [`Program`] and [`Definition`] in surface
//! syntax. Binary operators are right-associative, so only a left operand of
//! equal precedence needs parentheses.

use std::fmt::{self, Display};

use crate::ast::{
    BinaryOp, BinaryOpKind, CaseOf, Constructor, Definition, Expression, FnDefinition, Program,
    TypeDefinition, UnaryOp, UnaryOpKind,
};

const INDENT: &str = "  ";

const NOT_PRECEDENCE: u8 = 6;
const APPLY_PRECEDENCE: u8 = 7;
const ATOM_PRECEDENCE: u8 = 8;

struct Formatter {
    buffer: String,
    indent_level: usize,
}

impl Formatter {
    fn new() -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
        }
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }

    fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn finish(self) -> String {
        self.buffer
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();

        for (i, definition) in self.definitions.iter().enumerate() {
            if i > 0 {
                formatter.write_newline();
            }
            format_definition(definition, &mut formatter);
        }

        write!(f, "{}", formatter.finish())
    }
}

impl Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_definition(self, &mut formatter);
        write!(f, "{}", formatter.finish())
    }
}

fn format_definition(definition: &Definition, fmt: &mut Formatter) {
    match definition {
        Definition::Fn(function) => format_function(function, fmt),
        Definition::Type(ty) => format_type(ty, fmt),
    }
}

fn format_function(function: &FnDefinition, fmt: &mut Formatter) {
    fmt.write_str("fn ");
    fmt.write_str(&function.name);
    for param in &function.params {
        fmt.write_str(" ");
        fmt.write_str(param);
    }
    fmt.write_str(" {");

    // a case body spans several lines, so it gets a block of its own
    if matches!(function.body, Expression::CaseOf(_)) {
        fmt.write_newline();
        fmt.indent();
        fmt.write_indent();
        format_expression(&function.body, fmt, 0);
        fmt.dedent();
        fmt.write_newline();
        fmt.write_str("}");
    } else {
        fmt.write_str(" ");
        format_expression(&function.body, fmt, 0);
        fmt.write_str(" }");
    }
}

fn format_type(ty: &TypeDefinition, fmt: &mut Formatter) {
    fmt.write_str("type ");
    fmt.write_str(&ty.name);
    fmt.write_str(" = ");
    for (i, constructor) in ty.constructors.iter().enumerate() {
        if i > 0 {
            fmt.write_str(", ");
        }
        format_constructor(constructor, fmt);
    }
}

fn format_constructor(constructor: &Constructor, fmt: &mut Formatter) {
    fmt.write_str(&constructor.name);
    for field in &constructor.field_types {
        fmt.write_str(" ");
        fmt.write_str(field);
    }
}

fn format_expression(expr: &Expression, fmt: &mut Formatter, precedence: u8) {
    match expr {
        Expression::IntLiteral(value) => fmt.write_str(&value.to_string()),
        Expression::StringLiteral(text) => fmt.write_str(text),
        Expression::LowerRef(name) | Expression::UpperRef(name) => fmt.write_str(name),
        Expression::BinaryOp(op) => format_binary_op(op, fmt, precedence),
        Expression::UnaryOp(op) => format_unary_op(op, fmt, precedence),
        Expression::Apply(apply) => {
            let needs_parens = APPLY_PRECEDENCE < precedence;
            if needs_parens {
                fmt.write_str("(");
            }
            format_expression(&apply.function, fmt, APPLY_PRECEDENCE);
            fmt.write_str(" ");
            format_expression(&apply.argument, fmt, ATOM_PRECEDENCE);
            if needs_parens {
                fmt.write_str(")");
            }
        }
        Expression::CaseOf(case) => format_case(case, fmt, precedence),
    }
}

fn format_binary_op(op: &BinaryOp, fmt: &mut Formatter, parent_prec: u8) {
    let op_prec = binary_precedence(op.kind);
    let needs_parens = op_prec < parent_prec;

    if needs_parens {
        fmt.write_str("(");
    }

    format_expression(&op.left, fmt, op_prec + 1);
    fmt.write_str(" ");
    fmt.write_str(binary_symbol(op.kind));
    fmt.write_str(" ");
    format_expression(&op.right, fmt, op_prec);

    if needs_parens {
        fmt.write_str(")");
    }
}

fn format_unary_op(op: &UnaryOp, fmt: &mut Formatter, parent_prec: u8) {
    let needs_parens = NOT_PRECEDENCE < parent_prec;

    if needs_parens {
        fmt.write_str("(");
    }

    fmt.write_str(unary_symbol(op.kind));
    format_expression(&op.operand, fmt, APPLY_PRECEDENCE);

    if needs_parens {
        fmt.write_str(")");
    }
}

fn format_case(case: &CaseOf, fmt: &mut Formatter, parent_prec: u8) {
    // branches run until the first non-branch token, so a nested case is
    // only unambiguous at the top of a body
    let needs_parens = parent_prec > 0;

    if needs_parens {
        fmt.write_str("(");
    }

    fmt.write_str("case ");
    format_expression(&case.scrutinee, fmt, 1);

    fmt.indent();
    for branch in &case.branches {
        fmt.write_newline();
        fmt.write_indent();
        fmt.write_str("| ");
        fmt.write_str(&branch.pattern.to_string());
        fmt.write_str(" => { ");
        format_expression(&branch.body, fmt, 0);
        fmt.write_str(" }");
    }
    fmt.dedent();

    if needs_parens {
        fmt.write_str(")");
    }
}

/// Binding strength of a binary operator; comparisons bind loosest.
pub fn binary_precedence(kind: BinaryOpKind) -> u8 {
    match kind {
        BinaryOpKind::Equals | BinaryOpKind::NEquals => 1,
        BinaryOpKind::Plus | BinaryOpKind::Minus | BinaryOpKind::RShift | BinaryOpKind::LShift => 2,
        BinaryOpKind::Times | BinaryOpKind::Divide | BinaryOpKind::Modulo => 3,
        BinaryOpKind::Or => 4,
        BinaryOpKind::And | BinaryOpKind::Xor => 5,
    }
}

pub fn binary_symbol(kind: BinaryOpKind) -> &'static str {
    match kind {
        BinaryOpKind::Plus => "+",
        BinaryOpKind::Minus => "-",
        BinaryOpKind::Times => "*",
        BinaryOpKind::Divide => "/",
        BinaryOpKind::Modulo => "%",
        BinaryOpKind::RShift => ">>",
        BinaryOpKind::LShift => "<<",
        BinaryOpKind::And => "and",
        BinaryOpKind::Or => "or",
        BinaryOpKind::Xor => "xor",
        BinaryOpKind::Equals => "==",
        BinaryOpKind::NEquals => "!=",
    }
}

pub fn unary_symbol(kind: UnaryOpKind) -> &'static str {
    match kind {
        UnaryOpKind::Not => "!",
    }
}
