//! Whole-program emission driver
//!
//! Orchestrates one generation pass over a finished tree: standard-library
//! prologue, top-level declarations and functions in source order, a
//! synthesized `main` wrapping the remaining statements, and the trailer.
//! Opening and naming the destination file stays with the caller; this
//! module only ever sees a sink.

use std::io::Write;

use crate::ast::nodes::AstNode;
use crate::codegen::errors::CodegenError;
use crate::codegen::generator::CodeGenerator;

/// Fixed include block every generated program starts with. `math.h` is
/// here because `^` is rewritten to `pow()`.
const PROLOGUE: &str = "#include <stdio.h>\n\
                        #include <stdlib.h>\n\
                        #include <math.h>\n\
                        #include <string.h>\n\
                        \n\
                        // Generated by lanc\n\
                        \n";

/// Emit the complete C program for `root` into `out`.
///
/// The parser organizes a full program as a `Seq` whose first child holds
/// the global declarations and functions and whose rest is the main block;
/// the block's own braces are dropped because `main` supplies a pair. A
/// root of any other variant is treated as a bare statement stream and
/// wrapped in `main` whole.
///
/// On error the sink's contents are undefined; callers must not consume a
/// failed run's output.
pub fn emit_program<W: Write>(root: &AstNode, mut out: W) -> Result<(), CodegenError> {
    out.write_all(PROLOGUE.as_bytes())?;
    let mut gen = CodeGenerator::new(out);

    match root {
        AstNode::Seq { first, rest } => {
            gen.emit(first)?;
            gen.write_str("\nint main() {\n")?;
            match rest.as_deref() {
                Some(AstNode::Block { body }) => gen.emit(body)?,
                Some(other) => gen.emit(other)?,
                None => {}
            }
            gen.write_str("\nreturn 0;\n}\n")?;
        }
        other => {
            gen.write_str("int main() {\n")?;
            gen.emit(other)?;
            gen.write_str("return 0;\n}\n")?;
        }
    }

    gen.into_inner().flush()?;
    Ok(())
}

/// Emit into a fresh `String`, for callers that do their own file I/O.
pub fn program_to_string(root: &AstNode) -> Result<String, CodegenError> {
    let mut buf = Vec::new();
    emit_program(root, &mut buf)?;
    // The generator only ever writes UTF-8 text.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
