//! Diagnostic AST renderer
//!
//! Pure function of (node, indent level) → text. Not part of the
//! compilation contract; it exists so tests and humans can check what the
//! parser actually built. `Seq` nodes are flattened rather than labelled to
//! keep the listing readable.

use crate::ast::nodes::AstNode;

/// Render the whole tree rooted at `node`.
pub fn format_ast(node: &AstNode) -> String {
    let mut out = String::new();
    write_node(node, 0, &mut out);
    out
}

fn indent(level: usize, out: &mut String) {
    for _ in 0..level {
        out.push_str("  ");
    }
}

fn line(level: usize, text: &str, out: &mut String) {
    indent(level, out);
    out.push_str(text);
    out.push('\n');
}

fn write_node(node: &AstNode, level: usize, out: &mut String) {
    match node {
        AstNode::IntLit { value } => line(level, &format!("Num: {}", value), out),
        AstNode::FloatLit { value } => line(level, &format!("Float: {:?}", value), out),
        AstNode::StrLit { text } => line(level, &format!("String: {}", text), out),
        AstNode::Var { name, .. } => line(level, &format!("Var: {}", name), out),

        AstNode::Assign { lhs, rhs } => {
            line(level, "Assign:", out);
            write_node(lhs, level + 1, out);
            line(level + 1, ":=", out);
            write_node(rhs, level + 1, out);
        }
        AstNode::AssignIndexed {
            name,
            idx1,
            idx2,
            value,
        } => {
            line(level, &format!("Assign Array: {} [...] :=", name), out);
            line(level + 1, "Index 1:", out);
            write_node(idx1, level + 2, out);
            if let Some(idx2) = idx2 {
                line(level + 1, "Index 2:", out);
                write_node(idx2, level + 2, out);
            }
            line(level + 1, "Value:", out);
            write_node(value, level + 2, out);
        }
        AstNode::BinaryOp { op, left, right } => {
            line(level, &format!("Op: {}", op.symbol()), out);
            write_node(left, level + 1, out);
            write_node(right, level + 1, out);
        }

        AstNode::If {
            condition,
            then_branch,
            else_branch,
        } => {
            line(level, "IF", out);
            line(level + 1, "Cond:", out);
            write_node(condition, level + 2, out);
            line(level + 1, "Then:", out);
            write_node(then_branch, level + 2, out);
            if let Some(else_branch) = else_branch {
                line(level + 1, "Else:", out);
                write_node(else_branch, level + 2, out);
            }
        }
        AstNode::While { condition, body } => {
            line(level, "WHILE", out);
            write_node(condition, level + 1, out);
            line(level + 1, "Do:", out);
            write_node(body, level + 2, out);
        }
        AstNode::For {
            var,
            start,
            end,
            body,
        } => {
            line(level, &format!("FOR Var: {}", var), out);
            line(level + 1, "Start:", out);
            write_node(start, level + 2, out);
            line(level + 1, "To:", out);
            write_node(end, level + 2, out);
            line(level + 1, "Do:", out);
            write_node(body, level + 2, out);
        }
        AstNode::Block { body } => {
            line(level, "BLOCK", out);
            write_node(body, level + 1, out);
        }
        AstNode::Seq { first, rest } => {
            write_node(first, level, out);
            if let Some(rest) = rest {
                write_node(rest, level, out);
            }
        }

        AstNode::Decl {
            name, ty, shape, ..
        } => line(level, &format!("Decl: {} ({:?} {:?})", name, ty, shape), out),
        AstNode::Goto { label } => line(level, &format!("GOTO: {}", label), out),
        AstNode::Label { name } => line(level, &format!("LABEL: {}", name), out),
        AstNode::Return { value } => {
            line(level, "RETURN:", out);
            write_node(value, level + 1, out);
        }
        AstNode::Read { name, .. } => line(level, &format!("READ: {}", name), out),
        AstNode::Print { args } => {
            line(level, "PRINT:", out);
            line(level + 1, "Args:", out);
            write_node(args, level + 2, out);
        }

        AstNode::ArrayAccess { name, idx1, idx2 } => {
            line(level, &format!("Access Array: {}", name), out);
            line(level + 1, "Index 1:", out);
            write_node(idx1, level + 2, out);
            if let Some(idx2) = idx2 {
                line(level + 1, "Index 2:", out);
                write_node(idx2, level + 2, out);
            }
        }
        AstNode::FieldAccess { owner, field } => {
            line(level, &format!("Access Field: {}.{}", owner, field), out)
        }
        AstNode::Cast { target, expr } => {
            line(level, &format!("CAST to {:?}:", target), out);
            write_node(expr, level + 1, out);
        }

        AstNode::UnitDef { name, fields } => {
            line(level, &format!("UNIT: {}", name), out);
            line(level + 1, "Fields:", out);
            write_node(fields, level + 2, out);
        }
        AstNode::FuncDef {
            name,
            return_type,
            params,
            body,
            ..
        } => {
            line(level, &format!("FUNCTION: {} ({:?})", name, return_type), out);
            line(level + 1, "Params:", out);
            if let Some(params) = params {
                write_node(params, level + 2, out);
            }
            line(level + 1, "Body:", out);
            write_node(body, level + 2, out);
        }
        AstNode::FuncCall { name, args } => {
            line(level, &format!("CALL: {}(...)", name), out);
            line(level + 1, "Args:", out);
            if let Some(args) = args {
                write_node(args, level + 2, out);
            }
        }
        AstNode::ProcCall { name, args } => {
            line(level, &format!("PROC CALL: {}(...)", name), out);
            line(level + 1, "Args:", out);
            if let Some(args) = args {
                write_node(args, level + 2, out);
            }
        }
        AstNode::ParamList { param, rest } => {
            line(level, "Param:", out);
            write_node(param, level + 1, out);
            if let Some(rest) = rest {
                write_node(rest, level, out);
            }
        }
        AstNode::ArgList { arg, rest } => {
            line(level, "Arg:", out);
            write_node(arg, level + 1, out);
            if let Some(rest) = rest {
                write_node(rest, level, out);
            }
        }
    }
}
