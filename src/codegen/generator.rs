//! Recursive C code emitter
//!
//! One procedure, [`CodeGenerator::emit`], dispatches on the node variant
//! and writes the C translation of that construct before recursing into its
//! children. The match is exhaustive over the closed variant set, so adding
//! a node variant without a translation rule fails to compile.
//!
//! # Translation policy highlights
//!
//! - `^` has no C equivalent and is rewritten to a `pow()` call; every
//!   other binary operation is parenthesized infix, so source precedence
//!   survives regardless of C's own precedence table.
//! - The source `for` iterates an inclusive range; the emitted loop keeps
//!   the `<=` bound rather than converting to an exclusive one.
//! - A C label must be followed by a statement, so every label gets a null
//!   statement appended.
//! - Parameter and argument lists are built by prepending, head last; the
//!   tail is emitted before the head to restore source order.

use std::io::Write;

use tracing::warn;

use crate::ast::nodes::{AstNode, BinOp, DataType, Shape};
use crate::codegen::errors::CodegenError;
use crate::codegen::types::{c_type, scan_format, STRING_BUFFER_LEN};

/// Tree-walking C emitter over one output sink.
pub struct CodeGenerator<W: Write> {
    out: W,
}

impl<W: Write> CodeGenerator<W> {
    pub fn new(out: W) -> Self {
        CodeGenerator { out }
    }

    /// Hand the sink back, e.g. to flush or inspect it.
    pub fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn write_str(&mut self, s: &str) -> Result<(), CodegenError> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    /// Emit the C translation of `node` and everything below it.
    pub fn emit(&mut self, node: &AstNode) -> Result<(), CodegenError> {
        match node {
            // Sequencing is structural: first then rest, no separator.
            AstNode::Seq { first, rest } => {
                self.emit(first)?;
                if let Some(rest) = rest {
                    self.emit(rest)?;
                }
            }

            AstNode::UnitDef { name, fields } => {
                writeln!(self.out, "struct {} {{", name)?;
                self.emit(fields)?;
                writeln!(self.out, "}};")?;
            }

            AstNode::Decl {
                name,
                ty,
                shape,
                size1,
                size2,
                unit_name,
            } => match unit_name {
                Some(unit) => writeln!(self.out, "struct {} {};", unit, name)?,
                None if *ty == DataType::Str && *shape == Shape::Scalar => {
                    // 'char *s;' would reserve no storage for the text.
                    writeln!(self.out, "char {}[{}];", name, STRING_BUFFER_LEN)?
                }
                None => {
                    if *ty == DataType::Unit {
                        warn!(name = %name, "unit declaration without a unit name, defaulting to int");
                    }
                    write!(self.out, "{} {}", c_type(*ty), name)?;
                    match shape {
                        Shape::Array => write!(self.out, "[{}]", size1)?,
                        Shape::Matrix => write!(self.out, "[{}][{}]", size1, size2)?,
                        _ => {}
                    }
                    writeln!(self.out, ";")?;
                }
            },

            AstNode::FieldAccess { owner, field } => {
                write!(self.out, "{}.{}", owner, field)?;
            }

            // Head holds the most recently prepended parameter; tail first
            // restores source order.
            AstNode::ParamList { param, rest } => {
                if let Some(rest) = rest {
                    self.emit(rest)?;
                    write!(self.out, ", ")?;
                }
                self.emit_param(param)?;
            }

            AstNode::Block { body } => {
                writeln!(self.out, "{{")?;
                self.emit(body)?;
                writeln!(self.out, "}}")?;
            }

            // The target is a Var or FieldAccess; both emit verbatim.
            AstNode::Assign { lhs, rhs } => {
                self.emit(lhs)?;
                write!(self.out, " = ")?;
                self.emit(rhs)?;
                writeln!(self.out, ";")?;
            }

            AstNode::AssignIndexed {
                name,
                idx1,
                idx2,
                value,
            } => {
                write!(self.out, "{}[", name)?;
                self.emit(idx1)?;
                write!(self.out, "]")?;
                if let Some(idx2) = idx2 {
                    write!(self.out, "[")?;
                    self.emit(idx2)?;
                    write!(self.out, "]")?;
                }
                write!(self.out, " = ")?;
                self.emit(value)?;
                writeln!(self.out, ";")?;
            }

            AstNode::Var { name, .. } => {
                write!(self.out, "{}", name)?;
            }

            AstNode::IntLit { value } => {
                write!(self.out, "{}", value)?;
            }
            // {:?} keeps every digit and guarantees a decimal point, so the
            // text stays a C floating literal.
            AstNode::FloatLit { value } => {
                write!(self.out, "{:?}", value)?;
            }
            // Already quoted by the lexer; spliced in unchanged.
            AstNode::StrLit { text } => {
                write!(self.out, "{}", text)?;
            }

            AstNode::BinaryOp { op, left, right } => {
                if *op == BinOp::Pow {
                    // C has no exponentiation operator.
                    write!(self.out, "pow(")?;
                    self.emit(left)?;
                    write!(self.out, ", ")?;
                    self.emit(right)?;
                    write!(self.out, ")")?;
                } else {
                    write!(self.out, "(")?;
                    self.emit(left)?;
                    write!(self.out, " {} ", op.symbol())?;
                    self.emit(right)?;
                    write!(self.out, ")")?;
                }
            }

            AstNode::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(self.out, "if (")?;
                self.emit(condition)?;
                writeln!(self.out, ") {{")?;
                self.emit(then_branch)?;
                writeln!(self.out, "}}")?;
                if let Some(else_branch) = else_branch {
                    writeln!(self.out, "else {{")?;
                    self.emit(else_branch)?;
                    writeln!(self.out, "}}")?;
                }
            }

            AstNode::While { condition, body } => {
                write!(self.out, "while (")?;
                self.emit(condition)?;
                writeln!(self.out, ") {{")?;
                self.emit(body)?;
                writeln!(self.out, "}}")?;
            }

            // Inclusive upper bound; <= is the point.
            AstNode::For {
                var,
                start,
                end,
                body,
            } => {
                write!(self.out, "for ({} = ", var)?;
                self.emit(start)?;
                write!(self.out, "; {} <= ", var)?;
                self.emit(end)?;
                writeln!(self.out, "; {}++) {{", var)?;
                self.emit(body)?;
                writeln!(self.out, "}}")?;
            }

            AstNode::Goto { label } => {
                writeln!(self.out, "goto {};", label)?;
            }

            // A label cannot be the last thing in a C block; the null
            // statement keeps it valid wherever it lands.
            AstNode::Label { name } => {
                writeln!(self.out, "{}:", name)?;
                writeln!(self.out, ";")?;
            }

            AstNode::Return { value } => {
                write!(self.out, "return ")?;
                self.emit(value)?;
                writeln!(self.out, ";")?;
            }

            AstNode::FuncDef {
                name,
                return_type,
                unit_name,
                params,
                body,
            } => {
                match unit_name {
                    Some(unit) => write!(self.out, "\nstruct {} {}(", unit, name)?,
                    None => {
                        if *return_type == DataType::Unit {
                            warn!(name = %name, "unit return type without a unit name, defaulting to int");
                        }
                        write!(self.out, "\n{} {}(", c_type(*return_type), name)?
                    }
                }
                if let Some(params) = params {
                    self.emit(params)?;
                }
                writeln!(self.out, ") {{")?;
                self.emit(body)?;
                writeln!(self.out, "}}")?;
            }

            AstNode::FuncCall { name, args } => {
                write!(self.out, "{}(", name)?;
                if let Some(args) = args {
                    self.emit(args)?;
                }
                write!(self.out, ")")?;
            }

            // Called for effect: same spelling plus the terminator.
            AstNode::ProcCall { name, args } => {
                write!(self.out, "{}(", name)?;
                if let Some(args) = args {
                    self.emit(args)?;
                }
                writeln!(self.out, ");")?;
            }

            AstNode::Cast { target, expr } => {
                write!(self.out, "({})", c_type(*target))?;
                write!(self.out, "(")?;
                self.emit(expr)?;
                write!(self.out, ")")?;
            }

            AstNode::ArgList { arg, rest } => {
                if let Some(rest) = rest {
                    self.emit(rest)?;
                    write!(self.out, ", ")?;
                }
                self.emit(arg)?;
            }

            AstNode::ArrayAccess { name, idx1, idx2 } => {
                write!(self.out, "{}[", name)?;
                self.emit(idx1)?;
                write!(self.out, "]")?;
                if let Some(idx2) = idx2 {
                    write!(self.out, "[")?;
                    self.emit(idx2)?;
                    write!(self.out, "]")?;
                }
            }

            AstNode::Read {
                name,
                ty,
                idx1,
                idx2,
            } => {
                // Scalars need their address; a string buffer decays to a
                // pointer on its own.
                if *ty == DataType::Str {
                    write!(self.out, "scanf(\"{}\", {}", scan_format(*ty), name)?;
                } else {
                    write!(self.out, "scanf(\"{}\", &{}", scan_format(*ty), name)?;
                }
                if let Some(idx1) = idx1 {
                    write!(self.out, "[")?;
                    self.emit(idx1)?;
                    write!(self.out, "]")?;
                }
                if let Some(idx2) = idx2 {
                    write!(self.out, "[")?;
                    self.emit(idx2)?;
                    write!(self.out, "]")?;
                }
                writeln!(self.out, ");")?;
            }

            AstNode::Print { args } => {
                let mut cursor = Some(args.as_ref());
                while let Some(current) = cursor {
                    let (value, next) = match current {
                        AstNode::ArgList { arg, rest } => (arg.as_ref(), rest.as_deref()),
                        single => (single, None),
                    };

                    match print_tag(value) {
                        DataType::Str => {
                            write!(self.out, "printf(\"%s\\n\", ")?;
                            // A string constant already carries its quotes;
                            // anything else goes through the expression path.
                            if let AstNode::StrLit { text } = value {
                                write!(self.out, "{}", text)?;
                            } else {
                                self.emit(value)?;
                            }
                        }
                        DataType::Float => {
                            write!(self.out, "printf(\"%f\\n\", ")?;
                            self.emit(value)?;
                        }
                        _ => {
                            write!(self.out, "printf(\"%d\\n\", ")?;
                            self.emit(value)?;
                        }
                    }
                    writeln!(self.out, ");")?;

                    cursor = next;
                }
            }
        }

        Ok(())
    }

    /// Parameter spelling: no terminator, and unit-typed parameters carry
    /// their struct type name.
    fn emit_param(&mut self, param: &AstNode) -> Result<(), CodegenError> {
        if let AstNode::Decl {
            name, ty, unit_name, ..
        } = param
        {
            match unit_name {
                Some(unit) => write!(self.out, "struct {} {}", unit, name)?,
                None => write!(self.out, "{} {}", c_type(*ty), name)?,
            }
        }
        Ok(())
    }
}

/// Type tag a printed value formats under.
///
/// Mirrors the tag the parser stamped where one exists; untyped
/// expressions print as int.
fn print_tag(node: &AstNode) -> DataType {
    match node {
        AstNode::StrLit { .. } => DataType::Str,
        AstNode::FloatLit { .. } => DataType::Float,
        AstNode::IntLit { .. } => DataType::Int,
        AstNode::Var { ty, .. } => *ty,
        AstNode::Cast { target, .. } => *target,
        _ => DataType::Int,
    }
}
