//! C code generation
//!
//! This module turns a finished AST into C source text:
//! - [`generator`]: the recursive per-node emitter
//! - [`types`]: internal-type-to-C-type translation policy
//! - [`emit`]: whole-program driver (prologue, declarations, synthesized
//!   `main`, trailer)
//! - [`errors`]: the failure taxonomy
//!
//! # Generation Model
//!
//! Generation is a single read-only traversal. Nothing is buffered or
//! reordered: every node writes its fragments to the sink in tree order, so
//! output is deterministic for a fixed tree. The generator consults the
//! symbol table only incidentally; names were validated by the parsing
//! phase and are emitted as carried on the nodes.

pub mod emit;
pub mod errors;
pub mod generator;
pub mod types;
