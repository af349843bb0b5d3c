//! Pretty printer
//!
//! Display implementations that print a tree back as source code. Nested
//! binary operators and conditionals are always parenthesised, so the output
//! parses back to the same tree regardless of precedence or associativity.

use std::fmt::{self, Display};

use crate::ast::{Block, Expr, Function, Root, Stmt};

const INDENT: &str = "    ";

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

impl Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();

        for (index, function) in self.functions.iter().enumerate() {
            if index > 0 {
                formatter.write_newline();
            }
            format_function(function, &mut formatter);
            formatter.write_newline();
        }

        f.write_str(&formatter.finish())
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_function(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_block(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_stmt(self, &mut formatter);
        f.write_str(&formatter.finish())
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = Formatter::new();
        format_expr(self, &mut formatter, false);
        f.write_str(&formatter.finish())
    }
}

fn format_function(function: &Function, fmt: &mut Formatter) {
    fmt.write_str(&function.name.name);
    fmt.write_str("() ");
    format_block(&function.body, fmt);
}

fn format_block(block: &Block, fmt: &mut Formatter) {
    if block.stmts.is_empty() && block.tail.is_none() {
        fmt.write_str("{}");
        return;
    }

    fmt.write_str("{");
    fmt.write_newline();
    fmt.indent();

    for stmt in &block.stmts {
        fmt.write_indent();
        format_stmt(stmt, fmt);
        fmt.write_newline();
    }

    if let Some(tail) = &block.tail {
        fmt.write_indent();
        format_expr(tail, fmt, false);
        fmt.write_newline();
    }

    fmt.dedent();
    fmt.write_indent();
    fmt.write_str("}");
}

fn format_stmt(stmt: &Stmt, fmt: &mut Formatter) {
    match stmt {
        Stmt::Semi(expr) => {
            format_expr(expr, fmt, false);
            fmt.write_str(";");
        }
        Stmt::Expr(expr) => format_expr(expr, fmt, false),
    }
}

/// `nested` is set for operands, where compound expressions need parentheses.
fn format_expr(expr: &Expr, fmt: &mut Formatter, nested: bool) {
    match expr {
        Expr::Int(value) => fmt.write_str(&value.to_string()),
        Expr::Ident(ident) => fmt.write_str(&ident.name),
        Expr::Block(block) => format_block(block, fmt),
        Expr::BinOp(binop) => {
            if nested {
                fmt.write_str("(");
            }
            format_expr(&binop.lhs, fmt, true);
            fmt.write_str(" ");
            fmt.write_str(binop.op.symbol());
            fmt.write_str(" ");
            format_expr(&binop.rhs, fmt, true);
            if nested {
                fmt.write_str(")");
            }
        }
        Expr::If(if_expr) => {
            if nested {
                fmt.write_str("(");
            }
            fmt.write_str("if ");
            format_expr(&if_expr.cond, fmt, true);
            fmt.write_str(" then ");
            format_expr(&if_expr.then, fmt, true);
            if let Some(otherwise) = &if_expr.otherwise {
                fmt.write_str(" else ");
                format_expr(otherwise, fmt, true);
            }
            if nested {
                fmt.write_str(")");
            }
        }
    }
}
