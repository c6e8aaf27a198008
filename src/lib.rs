//! # Introduction
//!
//! lanc is the core of a source-to-source compiler that translates the LAN
//! teaching language (scalars, arrays, matrices, units, functions, control
//! flow, I/O) into equivalent C source text. The crate owns everything
//! between parsing and text output; lexing, grammar work and the
//! command-line driver are external collaborators.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → (external lexer/parser) → AST + symbol table → code generator → C text
//! ```
//!
//! 1. [`ast`] - node variants, factory constructors, and a diagnostic tree
//!    printer. The parser builds the tree bottom-up through the factories.
//! 2. [`symtab`] - scope-aware chained hash table. The parser installs
//!    symbols and enters/exits scopes at grammar boundaries; shadowed
//!    lookups resolve innermost-first.
//! 3. [`codegen`] - recursive type-directed emitter plus the
//!    whole-program driver that synthesizes the C `main`.
//!
//! ## Supported language
//!
//! Types: int, float, char, fixed-buffer strings, arrays, matrices, units
//! (user-defined structs).
//! Control flow: `if`/`else`, `while`, inclusive-range `for`, `goto` and
//! labels.
//! Subprograms: functions and procedures, unit-typed parameters and
//! returns.
//! I/O: `read` into scalars, strings and array/matrix elements; `print`
//! with per-value format selection.
//!
//! Each compilation session owns its tree and its [`symtab::SymbolTable`];
//! nothing in the crate is shared mutable state, so independent
//! compilations can run side by side.

pub mod ast;
pub mod codegen;
pub mod symtab;
