//! Code generation error types

use thiserror::Error;

/// Errors that can occur while emitting C source.
///
/// Generation itself has no failure path: absent children are typed as
/// `Option` and every variant is matched exhaustively, so the only thing
/// that can go wrong is the output sink.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The output sink rejected a write. Whatever was already written is
    /// undefined and must not be consumed.
    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),
}
