use std::io;

/// Failures that stop a translation. Syntax problems never do; they are
/// collected as [`crate::Diagnostic`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("failed to write instruction: {0}")]
    Emit(#[from] io::Error),
}
